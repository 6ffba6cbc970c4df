//! Source acquisition from files or URLs, format sniffing and PNG export

use crate::io::configuration::{FETCH_TIMEOUT_SECS, MAX_DOWNLOAD_BYTES};
use crate::io::error::{MosaicError, Result, UNKNOWN_PATH, WithPath};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::io::{self, Cursor, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Container formats accepted as mosaic sources
pub const ACCEPTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Gif];

const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];
const HTTP_OK: u16 = 200;

/// A decoded source image and the container format it was read from
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Pixel data
    pub image: DynamicImage,
    /// Format detected from the leading bytes
    pub format: ImageFormat,
}

impl SourceImage {
    /// Source dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Check whether `input` names a remote resource rather than a local path
pub fn is_remote(input: &Path) -> bool {
    input
        .to_str()
        .is_some_and(|s| REMOTE_SCHEMES.iter().any(|scheme| s.starts_with(scheme)))
}

/// Decode in-memory bytes, accepting only JPEG, PNG and GIF
///
/// The format is sniffed from the content, never from a file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not recognisable as an image
/// - The detected format is not JPEG, PNG or GIF
/// - Decoding the recognised container fails
pub fn decode_source(bytes: &[u8]) -> Result<SourceImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;

    let format = match reader.format() {
        Some(format) if ACCEPTED_FORMATS.contains(&format) => format,
        detected => {
            return Err(MosaicError::UnsupportedFormat {
                path: PathBuf::from(UNKNOWN_PATH),
                detected: detected.map(|f| format!("{f:?}")),
            });
        }
    };

    let image = reader.decode()?;
    log::debug!(
        "Decoded {format:?} source ({}x{}, {:?})",
        image.width(),
        image.height(),
        image.color()
    );

    Ok(SourceImage { image, format })
}

/// Read and decode a source image from a local path or URL
///
/// Local files win: `input` is only fetched over HTTP when no file exists
/// at that path and it starts with `http://` or `https://`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or the URL cannot be fetched
/// - The content is not a decodable JPEG, PNG or GIF image
pub fn load_source(input: &Path) -> Result<SourceImage> {
    let bytes = if !input.exists() && is_remote(input) {
        fetch_remote(input)?
    } else {
        std::fs::read(input).map_err(|e| MosaicError::FileSystem {
            path: input.to_path_buf(),
            operation: "read",
            source: e,
        })?
    };

    decode_source(&bytes).with_path(input)
}

/// Download the body of a URL
///
/// Anything other than a 200 response, including transport failures, is
/// reported as a missing input.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] with operation `"fetch"` when the
/// request fails, the status is not 200 or the body cannot be read
pub fn fetch_remote(url: &Path) -> Result<Vec<u8>> {
    let not_found = |reason: String| MosaicError::FileSystem {
        path: url.to_path_buf(),
        operation: "fetch",
        source: io::Error::new(ErrorKind::NotFound, reason),
    };

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build();
    let response = match agent.get(&url.to_string_lossy()).call() {
        Ok(response) if response.status() == HTTP_OK => response,
        Ok(response) => return Err(not_found(format!("HTTP status {}", response.status()))),
        Err(ureq::Error::Status(code, _)) => return Err(not_found(format!("HTTP status {code}"))),
        Err(ureq::Error::Transport(transport)) => return Err(not_found(transport.to_string())),
    };

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_DOWNLOAD_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| MosaicError::FileSystem {
            path: url.to_path_buf(),
            operation: "fetch",
            source: e,
        })?;
    log::debug!("Fetched {} bytes from {}", bytes.len(), url.display());

    Ok(bytes)
}

/// Write the canvas as PNG, whatever extension `output_path` carries
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

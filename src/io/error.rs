//! Error types and path context for mosaic operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder recorded when an error is converted without knowing its path
pub const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Source bytes were recognised but could not be decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Source bytes are not a JPEG, PNG or GIF image
    UnsupportedFormat {
        /// Path to the offending input
        path: PathBuf,
        /// Detected format name, if any was recognised
        detected: Option<String>,
    },

    /// Source data doesn't meet compositing requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The output canvas would exceed the configured memory guard
    ///
    /// The canvas grows with `width * height * tile_size²`, so modest inputs
    /// combined with large tiles quickly reach gigabytes.
    CanvasTooLarge {
        /// Source width in pixels
        source_width: u32,
        /// Source height in pixels
        source_height: u32,
        /// Requested tile edge length
        tile_size: u32,
        /// Maximum number of canvas pixels allowed
        limit: u64,
    },

    /// Failed to save the mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path, detected } => match detected {
                Some(format) => write!(
                    f,
                    "Invalid image '{}': {format} is not supported (expected JPEG, PNG or GIF)",
                    path.display()
                ),
                None => write!(
                    f,
                    "Invalid image '{}': unrecognised format (expected JPEG, PNG or GIF)",
                    path.display()
                ),
            },
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CanvasTooLarge {
                source_width,
                source_height,
                tile_size,
                limit,
            } => {
                write!(
                    f,
                    "Mosaic of {source_width}x{source_height} image with tile size {tile_size} exceeds the canvas limit of {limit} pixels"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches a filesystem path to errors converted without one
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only path-carrying variants that were converted blindly are rewritten
            match &mut error {
                MosaicError::ImageLoad { path: slot, .. }
                | MosaicError::UnsupportedFormat { path: slot, .. }
                | MosaicError::ImageExport { path: slot, .. }
                | MosaicError::FileSystem { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

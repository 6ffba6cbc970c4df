//! Tile size validation and whole-image thumbnail generation

use crate::io::configuration::MIN_TILE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::fmt;

/// Edge length in pixels of both the thumbnail and every output cell
///
/// Always at least [`MIN_TILE_SIZE`]; smaller values would produce a
/// degenerate canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileSize(u32);

impl TileSize {
    /// Validate a raw tile edge length
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] when `size` is below
    /// [`MIN_TILE_SIZE`]
    pub fn new(size: u32) -> Result<Self> {
        if size < MIN_TILE_SIZE {
            return Err(invalid_parameter(
                "tile_size",
                &size,
                &format!("Invalid tile size (minimum {MIN_TILE_SIZE})"),
            ));
        }
        Ok(Self(size))
    }

    /// Raw edge length in pixels
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Edge length as a buffer index
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resample the entire source into a `tile` x `tile` thumbnail
///
/// Aspect ratio is not preserved; the whole picture is squeezed into the
/// square cell with a Lanczos3 filter. Resampling runs in the source's own
/// pixel type, so 16-bit inputs are only narrowed to 8 bits afterwards.
pub fn generate_tile(source: &DynamicImage, tile: TileSize) -> RgbaImage {
    source
        .resize_exact(tile.get(), tile.get(), FilterType::Lanczos3)
        .to_rgba8()
}

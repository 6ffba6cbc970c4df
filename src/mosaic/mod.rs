//! Mosaic compositing core
//!
//! The pipeline is strictly sequential:
//! - A thumbnail of the whole source is generated once
//! - Every source pixel stamps that thumbnail into its own cell
//! - The cell is tinted halfway towards the pixel's color

/// Canvas assembly from thumbnail and tints
pub mod compositor;
/// Source and canvas geometry validation
pub mod layout;
/// Tile size validation and thumbnail generation
pub mod tile;
/// Channel normalization and tint blending
pub mod tint;

pub use compositor::{Execution, MosaicCompositor, compose};
pub use layout::MosaicLayout;
pub use tile::{TileSize, generate_tile};

use crate::io::error::Result;
use image::{DynamicImage, RgbaImage};

/// Build the complete mosaic of `source` with the default compositor
///
/// # Errors
///
/// Returns an error if the source is empty or the canvas would exceed the
/// default canvas limit
pub fn build_mosaic(source: &DynamicImage, tile: TileSize) -> Result<RgbaImage> {
    let layout = MosaicLayout::for_image(source, tile)?;
    let thumbnail = generate_tile(source, tile);
    Ok(compose(source, &thumbnail, &layout))
}

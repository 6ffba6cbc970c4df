//! Source and canvas geometry with the canvas size guard

use crate::io::configuration::{BYTES_PER_PIXEL, MAX_CANVAS_PIXELS};
use crate::io::error::{MosaicError, Result};
use crate::mosaic::tile::TileSize;
use image::{DynamicImage, GenericImageView};

/// Validated geometry of one mosaic
///
/// Construction fails instead of letting composition allocate a canvas that
/// cannot exist: the canvas holds `width * height * tile²` pixels, so the
/// footprint grows quadratically with the tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicLayout {
    source_width: u32,
    source_height: u32,
    tile: TileSize,
    canvas_width: u32,
    canvas_height: u32,
}

impl MosaicLayout {
    /// Layout under the default [`MAX_CANVAS_PIXELS`] limit
    ///
    /// # Errors
    ///
    /// See [`MosaicLayout::with_limit`]
    pub fn new(source_width: u32, source_height: u32, tile: TileSize) -> Result<Self> {
        Self::with_limit(source_width, source_height, tile, MAX_CANVAS_PIXELS)
    }

    /// Layout for a decoded source image under the default limit
    ///
    /// # Errors
    ///
    /// See [`MosaicLayout::with_limit`]
    pub fn for_image(source: &DynamicImage, tile: TileSize) -> Result<Self> {
        let (width, height) = source.dimensions();
        Self::new(width, height, tile)
    }

    /// Layout whose canvas may hold at most `max_pixels` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either source dimension is zero
    /// - A canvas side does not fit in `u32`
    /// - The canvas pixel count exceeds `max_pixels`
    pub fn with_limit(
        source_width: u32,
        source_height: u32,
        tile: TileSize,
        max_pixels: u64,
    ) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!("Source image is empty ({source_width}x{source_height})"),
            });
        }

        let too_large = || MosaicError::CanvasTooLarge {
            source_width,
            source_height,
            tile_size: tile.get(),
            limit: max_pixels,
        };

        let canvas_width = source_width.checked_mul(tile.get()).ok_or_else(too_large)?;
        let canvas_height = source_height
            .checked_mul(tile.get())
            .ok_or_else(too_large)?;

        if u64::from(canvas_width) * u64::from(canvas_height) > max_pixels {
            return Err(too_large());
        }

        Ok(Self {
            source_width,
            source_height,
            tile,
            canvas_width,
            canvas_height,
        })
    }

    /// Source dimensions as (width, height)
    pub const fn source_dimensions(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Edge length of every cell
    pub const fn tile(&self) -> TileSize {
        self.tile
    }

    /// Canvas dimensions as (width, height)
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Total number of canvas pixels
    pub const fn canvas_pixels(&self) -> u64 {
        self.canvas_width as u64 * self.canvas_height as u64
    }

    /// Bytes in one canvas row
    pub const fn canvas_stride(&self) -> usize {
        self.canvas_width as usize * BYTES_PER_PIXEL
    }

    /// Bytes in the band of canvas rows covered by one source row
    pub const fn band_len(&self) -> usize {
        self.canvas_stride() * self.tile.as_usize()
    }

    /// Top-left canvas corner of the cell for source pixel (x, y)
    pub const fn cell_origin(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        if x < self.source_width && y < self.source_height {
            Some((x * self.tile.get(), y * self.tile.get()))
        } else {
            None
        }
    }
}

//! Mosaic canvas assembly from a thumbnail and per-pixel tints
//!
//! Every source pixel (x, y) owns the disjoint canvas cell starting at
//! (x * T, y * T). The canvas is split into horizontal bands of T rows, one
//! per source row, so bands can be rendered independently and in parallel
//! without any locking.

use crate::io::configuration::BYTES_PER_PIXEL;
use crate::mosaic::layout::MosaicLayout;
use crate::mosaic::tint::{Tint, stamp_row};
use image::{DynamicImage, GenericImageView, RgbaImage};
use rayon::prelude::*;

/// How canvas bands are scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Render bands one after another on the calling thread
    Sequential,
    /// Render bands on the rayon thread pool
    #[default]
    Parallel,
}

/// Builds the full-resolution mosaic canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicCompositor {
    execution: Execution,
}

impl MosaicCompositor {
    /// Compositor using the default parallel execution
    pub const fn new() -> Self {
        Self {
            execution: Execution::Parallel,
        }
    }

    /// Select sequential or parallel band rendering
    #[must_use]
    pub const fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Scheduling mode in use
    pub const fn execution(self) -> Execution {
        self.execution
    }

    /// Compose the mosaic canvas
    ///
    /// # Panics
    ///
    /// See [`MosaicCompositor::compose_observed`]
    pub fn compose(
        self,
        source: &DynamicImage,
        thumbnail: &RgbaImage,
        layout: &MosaicLayout,
    ) -> RgbaImage {
        self.compose_observed(source, thumbnail, layout, || {})
    }

    /// Compose the mosaic canvas, calling `on_band` once per finished source row
    ///
    /// Output is identical for both execution modes; only the order in which
    /// `on_band` fires differs.
    ///
    /// # Panics
    ///
    /// Panics if the source dimensions differ from the layout or the thumbnail
    /// is not exactly tile x tile. Both indicate a caller contract violation.
    pub fn compose_observed<F>(
        self,
        source: &DynamicImage,
        thumbnail: &RgbaImage,
        layout: &MosaicLayout,
        on_band: F,
    ) -> RgbaImage
    where
        F: Fn() + Sync,
    {
        let tile = layout.tile();
        assert_eq!(
            source.dimensions(),
            layout.source_dimensions(),
            "source does not match mosaic layout"
        );
        assert_eq!(
            thumbnail.dimensions(),
            (tile.get(), tile.get()),
            "thumbnail must be tile x tile"
        );

        let tint_rows = sample_tints(source);
        let (canvas_width, canvas_height) = layout.canvas_dimensions();
        let mut canvas = RgbaImage::new(canvas_width, canvas_height);

        let band_len = layout.band_len();
        let stride = layout.canvas_stride();
        let buffer: &mut [u8] = &mut canvas;

        let render = |(band, tints): (&mut [u8], &Vec<Tint>)| {
            render_band(band, stride, tints, thumbnail);
            on_band();
        };

        match self.execution {
            Execution::Sequential => buffer.chunks_mut(band_len).zip(&tint_rows).for_each(render),
            Execution::Parallel => buffer
                .par_chunks_mut(band_len)
                .zip(&tint_rows)
                .for_each(render),
        }

        log::debug!(
            "Composed {canvas_width}x{canvas_height} canvas from {} bands",
            tint_rows.len()
        );

        canvas
    }
}

/// Compose with the default parallel compositor
///
/// # Panics
///
/// See [`MosaicCompositor::compose_observed`]
pub fn compose(source: &DynamicImage, thumbnail: &RgbaImage, layout: &MosaicLayout) -> RgbaImage {
    MosaicCompositor::new().compose(source, thumbnail, layout)
}

// One tint per source pixel, grouped by source row
fn sample_tints(source: &DynamicImage) -> Vec<Vec<Tint>> {
    source
        .to_rgba16()
        .rows()
        .map(|row| row.map(|pixel| Tint::from_pixel(*pixel)).collect())
        .collect()
}

// Stamps and tints every cell of one source row. Cell rows are visited
// canvas-row by canvas-row, which keeps writes sequential in memory.
fn render_band(band: &mut [u8], stride: usize, tints: &[Tint], thumbnail: &RgbaImage) {
    let cell_stride = thumbnail.width() as usize * BYTES_PER_PIXEL;
    for (canvas_row, thumbnail_row) in band
        .chunks_exact_mut(stride)
        .zip(thumbnail.as_raw().chunks_exact(cell_stride))
    {
        for (cell_row, tint) in canvas_row.chunks_exact_mut(cell_stride).zip(tints) {
            stamp_row(cell_row, thumbnail_row);
            tint.apply(cell_row);
        }
    }
}

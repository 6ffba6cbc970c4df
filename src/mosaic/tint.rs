//! Channel normalization and translucent tint blending
//!
//! Blending follows 16-bit fixed-point source-over arithmetic so results are
//! reproducible bit for bit: the foreground is premultiplied at 16 bits, the
//! background is weighted by the inverse alpha, and the sum is shifted back to
//! 8 bits.

use crate::io::configuration::{BYTES_PER_PIXEL, CHANNEL_NORMALIZATION_DIVISOR, TINT_ALPHA};
use image::Rgba;

const MAX_16: u32 = 0xffff;

/// Truncate a 16-bit channel value to 8 bits
pub const fn normalize_channel(value: u16) -> u8 {
    (value / CHANNEL_NORMALIZATION_DIVISOR) as u8
}

/// Scale a 16-bit channel by a 16-bit alpha
pub const fn premultiply(value: u16, alpha: u16) -> u16 {
    (value as u32 * alpha as u32 / MAX_16) as u16
}

/// Source-over blend of one straight-alpha channel onto an opaque background
///
/// Exact at `alpha` 0 and 255; otherwise within one unit of
/// `foreground * a + existing * (1 - a)` with `a = alpha / 255`.
pub const fn blend_channel(existing: u8, foreground: u8, alpha: u8) -> u8 {
    let alpha_16 = alpha as u32 * 0x101;
    let foreground_16 = foreground as u32 * alpha_16 / 0xff;
    let inverse = (MAX_16 - alpha_16) * 0x101;
    ((existing as u32 * inverse / MAX_16 + foreground_16) >> 8) as u8
}

/// Uniform translucent color laid over one mosaic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    /// Normalized red, green and blue
    pub rgb: [u8; 3],
    /// Opacity on a 0-255 scale
    pub alpha: u8,
}

impl Tint {
    /// Tint for one source pixel
    ///
    /// Color channels are premultiplied by the pixel's alpha before
    /// normalization, matching the black base translucent thumbnails are
    /// stamped onto. The pixel's alpha never reaches the tint opacity.
    pub const fn from_pixel(pixel: Rgba<u16>) -> Self {
        let Rgba([r, g, b, a]) = pixel;
        Self {
            rgb: [
                normalize_channel(premultiply(r, a)),
                normalize_channel(premultiply(g, a)),
                normalize_channel(premultiply(b, a)),
            ],
            alpha: TINT_ALPHA,
        }
    }

    /// Blend the tint over a run of opaque RGBA pixels in place
    pub fn apply(self, pixels: &mut [u8]) {
        for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            for (channel, &tint) in pixel.iter_mut().zip(&self.rgb) {
                *channel = blend_channel(*channel, tint, self.alpha);
            }
            if let Some(alpha) = pixel.last_mut() {
                *alpha = u8::MAX;
            }
        }
    }
}

/// Composite thumbnail pixels onto an opaque black base
///
/// Opaque pixels are copied verbatim; translucent ones are darkened so the
/// cell stays fully opaque.
pub fn stamp_row(target: &mut [u8], thumbnail: &[u8]) {
    for (dst, src) in target
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(thumbnail.chunks_exact(BYTES_PER_PIXEL))
    {
        let alpha = src.last().copied().unwrap_or(u8::MAX);
        for (channel, &value) in dst.iter_mut().zip(src) {
            *channel = blend_channel(0, value, alpha);
        }
        if let Some(a) = dst.last_mut() {
            *a = u8::MAX;
        }
    }
}

//! Mosaic image generation
//!
//! Every pixel of a source image is replaced by a cell holding a miniature of
//! the whole image, tinted towards that pixel's color. Up close each cell is a
//! recognisable thumbnail; from a distance the original picture reappears.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Thumbnail generation, tint blending and canvas composition
pub mod mosaic;

pub use io::error::{MosaicError, Result};

//! Compositing constants and runtime configuration defaults

/// Smallest accepted tile edge length
pub const MIN_TILE_SIZE: u32 = 2;

/// Opacity of the per-cell tint on a 0-255 scale
pub const TINT_ALPHA: u8 = 127;

/// Divisor mapping a 16-bit channel onto 8 bits (`65535 / 255`)
pub const CHANNEL_NORMALIZATION_DIVISOR: u16 = 257;

// Safety limit to prevent excessive memory allocation
/// Maximum number of output canvas pixels (1 GiB of RGBA data)
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Bytes per RGBA canvas pixel
pub const BYTES_PER_PIXEL: usize = 4;

// Remote input settings
/// Seconds allowed for connecting to and reading from a remote source
pub const FETCH_TIMEOUT_SECS: u64 = 30;
/// Largest remote body accepted before decoding (256 MiB)
pub const MAX_DOWNLOAD_BYTES: u64 = 256 << 20;

// Output settings
/// Suffix added to the input stem when no output path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of every written mosaic
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

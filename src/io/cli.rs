//! Command-line interface for turning one image into a mosaic PNG

use crate::io::configuration::{MAX_CANVAS_PIXELS, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{export_png, is_remote, load_source};
use crate::io::logging::level_for;
use crate::io::progress::ProgressReporter;
use crate::mosaic::{Execution, MosaicCompositor, MosaicLayout, TileSize, generate_tile};
use clap::{ArgAction, Parser};
use simplelog::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mosaicmaker")]
#[command(
    author,
    version,
    about = "Create a mosaic PNG where every pixel becomes a tinted miniature of the image"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Edge length in pixels of each mosaic cell (minimum 2)
    #[arg(value_name = "TILE_SIZE")]
    pub tile_size: u32,

    /// Input JPEG, PNG or GIF file, or an http(s) URL to one
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG file (defaults to <input>_mosaic.png)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Compose on the calling thread instead of the thread pool
    #[arg(short, long)]
    pub sequential: bool,

    /// Refuse canvases with more pixels than this
    #[arg(long, value_name = "PIXELS", default_value_t = MAX_CANVAS_PIXELS)]
    pub max_pixels: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the quiet and verbose flags
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.quiet, self.verbose)
    }

    /// Scheduling mode selected by the sequential flag
    pub const fn execution(&self) -> Execution {
        if self.sequential {
            Execution::Sequential
        } else {
            Execution::Parallel
        }
    }

    /// Where the mosaic will be written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Orchestrates loading, compositing and export for one input
pub struct MosaicProcessor {
    cli: Cli,
    progress: ProgressReporter,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        Self { cli, progress }
    }

    /// Build the mosaic and write it, returning the output path
    ///
    /// Every validation runs before the canvas is allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size is below the minimum
    /// - The input cannot be read or fetched, or is not a JPEG, PNG or GIF image
    /// - The canvas would exceed the configured pixel limit
    /// - The output cannot be written
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let tile = TileSize::new(self.cli.tile_size)?;
        let output_path = self.cli.output_path();

        let source = load_source(&self.cli.input)?;
        let (width, height) = source.dimensions();
        log::info!(
            "Loaded {} ({:?}, {width}x{height})",
            self.cli.input.display(),
            source.format
        );

        let layout = MosaicLayout::with_limit(width, height, tile, self.cli.max_pixels)?;
        let (canvas_width, canvas_height) = layout.canvas_dimensions();
        log::info!("Composing {canvas_width}x{canvas_height} mosaic with tile size {tile}");

        let thumbnail = generate_tile(&source.image, tile);

        self.progress.start(&self.cli.input, height);
        let compositor = MosaicCompositor::new().with_execution(self.cli.execution());
        let progress = &self.progress;
        let canvas =
            compositor.compose_observed(&source.image, &thumbnail, &layout, || progress.advance());
        self.progress.finish(start_time.elapsed());

        export_png(&canvas, &output_path)?;
        log::info!("Wrote {}", output_path.display());

        Ok(output_path)
    }
}

/// Default output location: `<stem>_mosaic.png` beside the input
///
/// URL inputs write into the working directory.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );

    if let Some(parent) = input_path.parent().filter(|_| !is_remote(input_path)) {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

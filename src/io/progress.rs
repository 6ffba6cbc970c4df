//! Progress display for canvas composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports how many source rows have been composed
///
/// The bar is shared by reference across rayon workers; [`ProgressBar`]
/// handles the synchronisation internally.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressReporter {
    /// Reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Reporter that tracks counts without drawing anything
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a new input with `rows` source rows
    pub fn start(&self, input: &Path, rows: u32) {
        let display_name = input
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_length(u64::from(rows));
        self.bar.set_position(0);
        self.bar.set_prefix(display_name);
        self.bar.set_message(String::new());
    }

    /// Record one finished source row
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of rows recorded since the last [`ProgressReporter::start`]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark composition as complete and report elapsed time
    pub fn finish(&self, elapsed: Duration) {
        self.bar
            .finish_with_message(format!("✓ {:.2}s", elapsed.as_secs_f64()));
    }
}

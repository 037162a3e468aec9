//! Progress display for the generation pipeline
//!
//! Shows a spinner per pipeline stage and a running frame counter while the
//! growth animation is encoded. All output goes to stderr and is suppressed
//! in quiet mode.

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} ({pos} frames)")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display for one pipeline run
pub struct PipelineProgress {
    bar: Option<ProgressBar>,
}

impl PipelineProgress {
    /// Create a progress display; a disabled one emits nothing
    pub fn new(enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(STAGE_STYLE.clone());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });

        Self { bar }
    }

    /// Announce a new pipeline stage
    pub fn stage(&self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.set_style(STAGE_STYLE.clone());
            pb.set_message(message.to_string());
        }
    }

    /// Print a line above the spinner without disturbing it
    pub fn note(&self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.println(message.to_string());
        }
    }

    /// Report the run seed, printed even when progress display is disabled
    /// so any run can be reproduced on demand
    #[allow(clippy::print_stderr)]
    pub fn report_seed(&self, seed: u64) {
        if let Some(pb) = &self.bar {
            pb.println(format!("Using seed {seed}"));
        } else {
            eprintln!("Using seed {seed}");
        }
    }

    /// Switch to frame-counting display for animation encoding
    pub fn start_frames(&self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.set_style(FRAME_STYLE.clone());
            pb.set_position(0);
            pb.set_message(message.to_string());
        }
    }

    /// Count one encoded animation frame
    pub fn frame_tick(&self) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    /// Clear the spinner and print a closing message
    pub fn finish(&self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
            pb.println(message.to_string());
        }
    }
}

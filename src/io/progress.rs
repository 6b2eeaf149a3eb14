//! Batch progress display for image generation

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Visible progress for `total` images
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Progress that tracks counts but draws nothing
    pub fn hidden(total: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total);
        Self { bar }
    }

    /// Record one finished image
    pub fn complete_image(&self, seed: u32) {
        self.bar.set_message(format!("seed {seed}"));
        self.bar.inc(1);
    }

    /// Images completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the display
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

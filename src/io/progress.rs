//! Batch progress reporting for multi-file runs

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch operations
///
/// Directory runs get a single batch bar tracking file counts with the
/// active file name in the message slot; single-file runs skip the bar
/// and report completion directly on stderr.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Set up display for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(batch_bar);
        }
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.set_message(display_name(path));
        }
    }

    /// Record a finished file and the number of tiles painted for it
    // Allow print for user feedback on completed single-file runs
    #[allow(clippy::print_stderr)]
    pub fn complete_file(&self, path: &Path, tile_count: usize) {
        self.batch_bar.as_ref().map_or_else(
            || eprintln!("✓ {}: {tile_count} tiles", display_name(path)),
            |batch_bar| {
                batch_bar.inc(1);
                batch_bar.set_message(format!("✓ {} ({tile_count} tiles)", display_name(path)));
            },
        );
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

/// A terminal progress bar for the translation pass.
///
/// Hidden in quiet mode. Automatically clears itself when dropped (RAII pattern).
pub struct Progress {
    progress_bar: ProgressBar,
}

impl Progress {
    /// Creates and starts a progress bar over `len` steps.
    pub fn new(len: u64, message: &str) -> Self {
        if output::is_quiet() {
            return Self::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner} {msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]);
        progress_bar.set_style(style);
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// A progress bar that never draws.
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Stops the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

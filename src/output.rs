//! Where user-facing output goes, and whether it may be colored.
//!
//! The run summary is the only thing written to stdout, so the binary can be
//! piped. Status lines and the progress bar go to stderr and disappear in
//! quiet mode; errors are always printed. Each stream is colored only when it
//! is a terminal and `NO_COLOR` is unset.

use std::io::IsTerminal;
use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// The two streams the binary writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress status lines and the progress bar.
    pub quiet: bool,
    /// Set from `NO_COLOR` (https://no-color.org/).
    pub no_color: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
}

impl OutputConfig {
    /// Whether text written to `stream` should carry ANSI colors.
    pub const fn colors_enabled(&self, stream: Stream) -> bool {
        if self.no_color {
            return false;
        }
        match stream {
            Stream::Stdout => self.stdout_tty,
            Stream::Stderr => self.stderr_tty,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            no_color: std::env::var_os("NO_COLOR").is_some(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
        }
    }
}

/// Installs the process-wide configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn colors_enabled(stream: Stream) -> bool {
    config().colors_enabled(stream)
}

/// Prints a status line to stderr unless quiet mode is on.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(no_color: bool, stdout_tty: bool, stderr_tty: bool) -> OutputConfig {
        OutputConfig {
            quiet: false,
            no_color,
            stdout_tty,
            stderr_tty,
        }
    }

    #[test]
    fn test_colors_follow_each_stream() {
        let piped_stdout = config(false, false, true);
        assert!(!piped_stdout.colors_enabled(Stream::Stdout));
        assert!(piped_stdout.colors_enabled(Stream::Stderr));

        let piped_stderr = config(false, true, false);
        assert!(piped_stderr.colors_enabled(Stream::Stdout));
        assert!(!piped_stderr.colors_enabled(Stream::Stderr));
    }

    #[test]
    fn test_no_color_wins_over_terminal() {
        let config = config(true, true, true);
        assert!(!config.colors_enabled(Stream::Stdout));
        assert!(!config.colors_enabled(Stream::Stderr));
    }

    #[test]
    fn test_not_quiet_by_default() {
        assert!(!OutputConfig::default().quiet);
        assert!(!is_quiet());
    }
}

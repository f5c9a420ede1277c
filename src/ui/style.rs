//! Color helpers for CLI output, built on owo-colors.
//!
//! A [`Style`] is bound to the stream its text is written to and returns
//! plain text when that stream should not be colored.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output::{self, Stream};

#[derive(Debug, Clone, Copy)]
pub struct Style {
    stream: Stream,
}

impl Style {
    /// For status lines.
    pub const STDERR: Self = Self {
        stream: Stream::Stderr,
    };
    /// For the run summary.
    pub const STDOUT: Self = Self {
        stream: Stream::Stdout,
    };

    /// Labels such as "cached" or "cache entries".
    pub fn label<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    /// Counts and paths.
    pub fn value<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn success<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn warning<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    fn paint<T: Display>(self, text: T, colorize: impl FnOnce(&T) -> String) -> String {
        if output::colors_enabled(self.stream) {
            colorize(&text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_text() {
        assert!(Style::STDOUT.success("OK").contains("OK"));
        assert!(Style::STDERR.value(42).contains("42"));
        assert!(Style::STDERR.label("cache").contains("cache"));
        assert!(Style::STDERR.warning("disabled").contains("disabled"));
    }
}

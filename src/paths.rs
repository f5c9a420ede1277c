//! XDG-style path utilities for the configuration directory.

use std::path::PathBuf;

/// Directory name used under the user configuration root.
const APP_DIR: &str = "awesome-export";

/// Returns the configuration directory for awesome-export.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/awesome-export` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/awesome-export` otherwise
///
/// Returns `None` when neither variable nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_DIR)),
        _ => dirs::home_dir().map(|home| home.join(".config").join(APP_DIR)),
    }
}

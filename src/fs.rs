//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on the same
/// filesystem. Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if the directory, the temp file or the rename fails.
pub fn atomic_write(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

const MAX_INPUT_SIZE: u64 = 16 * 1024 * 1024; // 16MB

pub struct InputReader;

impl InputReader {
    /// Reads the whole markdown source into memory.
    pub fn read(path: &Path) -> Result<String> {
        if !path.exists() {
            bail!("Input file not found: {}", path.display());
        }

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len();
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size ({} MB): {}",
                size as f64 / 1024.0 / 1024.0,
                MAX_INPUT_SIZE / 1024 / 1024,
                path.display()
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::fs::atomic_write;

/// Translations keyed by the content hash of their source text.
///
/// Persisted as a flat JSON object. The file is read once at startup and
/// rewritten wholesale by [`TranslationCache::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCache {
    entries: BTreeMap<String, String>,
}

impl TranslationCache {
    /// Loads the cache file, falling back to an empty cache when the file is
    /// missing, unreadable or not a JSON object of strings.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no translation cache yet");
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable translation cache");
                return Self::default();
            }
        };

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries = entries.len(), "loaded translation cache");
                Self { entries }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt translation cache");
                Self::default()
            }
        }
    }

    /// Writes every entry to `path`, replacing the previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize translation cache")?;

        atomic_write(path, &contents)
            .with_context(|| format!("Failed to save translation cache: {}", path.display()))?;

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "saved translation cache");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, translation: String) {
        self.entries.insert(key, translation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

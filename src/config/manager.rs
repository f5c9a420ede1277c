use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "awesome-export.toml";

/// Input and output locations, the `[export]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Markdown awesome list to read.
    pub input: PathBuf,
    /// JSON document to write.
    pub output: PathBuf,
    /// Translation cache file.
    pub cache: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("awesome-sysadmin.md"),
            output: PathBuf::from("data.json"),
            cache: PathBuf::from(".translate_cache.json"),
        }
    }
}

/// Translation backend settings, the `[translate]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateSettings {
    /// When false, uncached descriptions are copied untranslated.
    pub enabled: bool,
    /// LibreTranslate-compatible `/translate` URL.
    pub endpoint: String,
    /// Pause after each backend call, in milliseconds.
    pub delay_ms: u64,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslateSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://localhost:5000/translate".to_string(),
            delay_ms: 50,
            timeout_secs: 60,
        }
    }
}

impl TranslateSettings {
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The complete configuration file structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub export: ExportSettings,
    pub translate: TranslateSettings,
}

/// Locates and loads the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Finds the config file to use, relative to the current directory.
    ///
    /// See [`ConfigManager::discover_in`].
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::discover_in(explicit, &cwd)
    }

    /// Finds the config file to use.
    ///
    /// Resolution order:
    /// 1. `explicit`, which must exist
    /// 2. `<dir>/awesome-export.toml`
    /// 3. `config.toml` in [`paths::config_dir`]
    ///
    /// When none exists, built-in defaults are used.
    pub fn discover_in(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Self {
                config_path: Some(path.to_path_buf()),
            });
        }

        let local = dir.join(LOCAL_CONFIG_FILE);
        let user = paths::config_dir().map(|d| d.join("config.toml"));

        let config_path = std::iter::once(local)
            .chain(user)
            .find(|candidate| candidate.is_file());

        Ok(Self { config_path })
    }

    /// The file that [`ConfigManager::load`] reads, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let Some(path) = &self.config_path else {
            tracing::debug!("no config file found, using defaults");
            return Ok(ConfigFile::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config_file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config_file)
    }
}

//! Configuration loading and management
//!
//! Handles parsing of the optional `.task-cli.toml` file in the working
//! directory.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::storage::DEFAULT_STORE_FILE;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = ".task-cli.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Store file configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Human output configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Store-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file, relative to the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON array when saving
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            pretty: true,
        }
    }
}

/// Display-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// strftime format for timestamps in `list` output
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

// RFC 822 layout: "02 Jan 06 15:04 MST"
fn default_time_format() -> String {
    "%d %b %y %H:%M %Z".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load(&config_path).map_err(|err| match err {
            Error::InvalidConfig(_) => err,
            other => Error::InvalidConfig(format!("{}: {other}", config_path.display())),
        })
    }

    /// Resolve the store file path against `dir`
    pub fn store_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.store.path)
    }

    fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty()
            || self.store.path.to_string_lossy().trim().is_empty()
        {
            return Err(Error::InvalidConfig(
                "store.path cannot be empty".to_string(),
            ));
        }

        let format = self.display.time_format.trim();
        if format.is_empty() {
            return Err(Error::InvalidConfig(
                "display.time_format cannot be empty".to_string(),
            ));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidConfig(format!(
                "display.time_format: invalid format '{format}'"
            )));
        }

        Ok(())
    }
}

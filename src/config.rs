//! Application configuration.
//!
//! Stored in TOML at the platform config dir (e.g.
//! `~/.config/tps/config.toml`). Resolution order for the data location:
//! `--data` flag (or `TPS_DATA_DIR`, handled by clap), then the config file.
//!
//! ```toml
//! data_dir = "/home/user/pathway-data"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where pathway record JSON lives (file or directory).
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Platform config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("io", "tps", "tps").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location; a missing file is an empty config.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Pick the data location: the flag/env value wins, then the config file.
pub fn resolve_data_path(flag: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    flag.or_else(|| config.data_dir.clone())
}

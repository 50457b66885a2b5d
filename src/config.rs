//! # Configuration Module
//!
//! Optional settings read from a platform-appropriate location. The monitor
//! never writes this file; when it is absent the defaults apply.
//!
//! ## Settings
//! - `refresh_interval_secs`: Seconds between refresh cycles (default 15)
//! - `seed`: Fixed RNG seed for reproducible readings (default: random)
//!
//! ## Storage Location
//! - macOS: ~/Library/Application Support/tpt-monitor/config.toml
//! - Linux: ~/.config/tpt-monitor/config.toml
//! - Windows: %APPDATA%\tpt-monitor\config.toml

use crate::error::ConfigError;
use crate::refresh::REFRESH_PERIOD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub refresh_interval_secs: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_secs: REFRESH_PERIOD.as_secs(),
            seed: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tpt-monitor")
            .join("config.toml")
    }

    /// Load config from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::ReadFailed(e)),
        }
    }

    /// Load config, logging and falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("{}; using default settings", e);
            Self::default()
        })
    }

    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::ParseFailed)?;
        if config.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(config)
    }

    /// Refresh period, never shorter than one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::VenueConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl VenueConfig {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/tableside/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tableside").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `VenueConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(VenueConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: VenueConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Venue name must not be empty".to_string(),
            });
        }

        if self.reservation_duration_minutes == 0 {
            return Err(ConfigError::ValidationError {
                message: "Reservation duration must be at least one minute".to_string(),
            });
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Base URL must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

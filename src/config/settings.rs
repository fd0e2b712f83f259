//! Application configuration
//!
//! Defaults merged with an optional TOML file, normally
//! `~/.sourcelens/config.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::source::{FILENAME_LENGTH, FILE_URL_LENGTH};
use crate::telemetry::TelemetryConfig;
use crate::util::paths::config_path;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display truncation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Columns kept when truncating full file URLs
    pub file_url_length: usize,
    /// Columns kept when truncating filenames
    pub filename_length: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            file_url_length: FILE_URL_LENGTH,
            filename_length: FILENAME_LENGTH,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Display truncation settings
    pub display: DisplayConfig,
    /// Telemetry settings
    pub telemetry: TelemetryConfig,
}

/// TOML representation of the display section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TomlDisplayConfig {
    file_url_length: Option<usize>,
    filename_length: Option<usize>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
struct TomlConfig {
    display: Option<TomlDisplayConfig>,
    telemetry: Option<TelemetryConfig>,
}

impl Config {
    /// Load the default config file, merging with defaults. A missing file
    /// just means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = config_path();
        if !config_file.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_file)
    }

    /// Load configuration from an explicit TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration TOML, merging with defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(display) = toml_config.display {
            if let Some(file_url_length) = display.file_url_length {
                config.display.file_url_length = file_url_length;
            }
            if let Some(filename_length) = display.filename_length {
                config.display.filename_length = filename_length;
            }
        }

        if let Some(telemetry) = toml_config.telemetry {
            config.telemetry = telemetry;
        }

        Ok(config)
    }
}

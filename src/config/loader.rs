use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::pokemon::ArtworkTemplate;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pokelist/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokelist").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates value ranges and formats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::ValidationError { message });

        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return invalid(format!(
                "api.base_url '{}' must start with http:// or https://",
                base_url
            ));
        }
        if self.api.page_size == 0 {
            return invalid("api.page_size must be at least 1".to_string());
        }
        if self.artwork_template().is_none() {
            return invalid(format!(
                "artwork.template '{}' must contain {{id}}",
                self.artwork.template
            ));
        }
        if self.ui.card_width < 8 {
            return invalid(format!(
                "ui.card_width must be at least 8, got {}",
                self.ui.card_width
            ));
        }
        if self.ui.card_height < 4 {
            return invalid(format!(
                "ui.card_height must be at least 4, got {}",
                self.ui.card_height
            ));
        }
        if self.ui.tick_rate_ms < 10 {
            return invalid(format!(
                "ui.tick_rate_ms must be at least 10, got {}",
                self.ui.tick_rate_ms
            ));
        }

        Ok(())
    }

    pub fn artwork_template(&self) -> Option<ArtworkTemplate> {
        ArtworkTemplate::new(self.artwork.template.clone())
    }
}

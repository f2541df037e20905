//! On-disk formats, picked by file extension.

use std::path::Path;

use grinder_common::ConfigError;

use crate::schema::Config;

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }

    pub fn parse(self, content: &str) -> Result<Config, ConfigError> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}"))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}"))),
        }
    }

    pub fn render(self, config: &Config) -> Result<String, ConfigError> {
        match self {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                ConfigError::ParseError(format!("failed to serialize config to JSON: {e}"))
            }),
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| {
                ConfigError::ParseError(format!("failed to serialize config to TOML: {e}"))
            }),
        }
    }
}

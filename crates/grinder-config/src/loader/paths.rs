//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};

use grinder_common::ConfigError;
use tracing::info;

use crate::schema::Config;
use crate::writer::save_config_to_path;

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("grinder").join("config.json"))
}

/// Write a default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    save_config_to_path(&Config::default(), path)?;
    info!("created default config at {}", path.display());
    Ok(())
}

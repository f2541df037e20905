//! Read a config from a path or the platform default.

use std::io::ErrorKind;
use std::path::Path;

use grinder_common::ConfigError;
use tracing::{info, warn};

use crate::schema::Config;
use crate::validation;

use super::format::ConfigFormat;
use super::paths::{create_default_config, default_config_path};

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    ConfigFormat::from_path(path).parse(&content)
}

/// Load config from a specific file.
///
/// Missing fields take their defaults. A config that fails validation is
/// still returned; the failure is logged as a warning and left for the
/// caller to act on.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from a specific file and reject it if it fails validation.
pub fn load_validated(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;
    validation::validate(&config)?;
    info!("loaded valid config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux: `~/.config/grinder/config.json`
/// On macOS: `~/Library/Application Support/grinder/config.json`
///
/// If the file does not exist, a default config is written there and
/// returned.
pub fn load_default() -> Result<Config, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

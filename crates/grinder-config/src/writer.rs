//! Write a [`Config`] to disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated config behind.

use std::path::Path;

use grinder_common::ConfigError;

use crate::loader::ConfigFormat;
use crate::schema::Config;

/// Write config to a specific path, in the format its extension implies.
///
/// Creates parent directories if they don't exist.
pub fn save_config_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = ConfigFormat::from_path(path).render(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, &content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows refuses to rename over an open file
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &content).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

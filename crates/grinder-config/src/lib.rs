//! Grinder configuration system.
//!
//! Provides the config schema, a first-failure validation engine that
//! reports exactly where in the tree a setting is wrong, JSON/TOML
//! loading and saving, and live reload. All sections use sensible
//! defaults so partial configs load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grinder_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod loader;
pub mod reload;
pub mod schema;
pub mod validation;
pub mod watcher;
pub mod writer;

// Re-export core types for convenience
pub use loader::{default_config_path, load_from_path, load_validated};
pub use reload::ReloadManager;
pub use schema::Config;
pub use validation::validate;
pub use watcher::ConfigWatcher;
pub use writer::save_config_to_path;

use grinder_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default config file if none exists.
pub fn load_config() -> Result<Config, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &Config) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

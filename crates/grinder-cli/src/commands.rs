//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use grinder_common::{ConfigError, GrinderError};
use grinder_config::{loader, writer, Config, ReloadManager};
use tracing::info;

fn resolve(path: Option<PathBuf>) -> Result<PathBuf, GrinderError> {
    match path {
        Some(path) => Ok(path),
        None => Ok(loader::default_config_path()?),
    }
}

/// Outcome of `check`, rendered for the terminal.
pub(crate) fn check_report(path: &Path, json: bool) -> Result<(String, bool), GrinderError> {
    match loader::load_validated(path) {
        Ok(_) => {
            let report = if json {
                r#"{"valid":true}"#.to_string()
            } else {
                "config is valid".to_string()
            };
            Ok((report, true))
        }
        Err(ConfigError::Validation(e)) => {
            let report = if json {
                serde_json::to_string(&e).map_err(|e| GrinderError::Other(e.to_string()))?
            } else {
                format!("invalid config: {e}")
            };
            Ok((report, false))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn check(path: Option<PathBuf>, json: bool) -> Result<ExitCode, GrinderError> {
    let path = resolve(path)?;
    let (report, valid) = check_report(&path, json)?;
    println!("{report}");
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn init(path: Option<PathBuf>, force: bool) -> Result<ExitCode, GrinderError> {
    let path = resolve(path)?;
    if path.exists() && !force {
        return Err(GrinderError::Other(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }
    writer::save_config_to_path(&Config::default(), &path)?;
    println!("wrote default config to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

pub async fn watch(path: Option<PathBuf>) -> Result<ExitCode, GrinderError> {
    let path = resolve(path)?;
    let (config, mut rx) = ReloadManager::start(path.clone()).await;
    info!(
        path = %path.display(),
        accounts = config.accounts.len(),
        "watching config"
    );

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let accounts = rx.borrow_and_update().accounts.len();
                info!(accounts, "config reloaded");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

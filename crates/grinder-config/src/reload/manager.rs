use std::path::{Path, PathBuf};

use grinder_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

use crate::loader;
use crate::schema::Config;
use crate::watcher::ConfigWatcher;

/// Manages live config reloading.
///
/// Publishes configs on a [`tokio::sync::watch`] channel. Only configs
/// that pass validation are published; an invalid edit is logged and the
/// last good config stays current.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the initial config and start watching for changes.
    ///
    /// Falls back to [`Config::default`] if the file is missing, unreadable
    /// or invalid. Must be called from within a Tokio runtime.
    pub async fn start(config_path: PathBuf) -> (Config, watch::Receiver<Config>) {
        let manager = ReloadManager::new(config_path);

        let initial = match manager.reload() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                Config::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial.clone());
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    /// Read and validate the config file.
    pub fn reload(&self) -> Result<Config, ConfigError> {
        loader::load_validated(&self.config_path)
    }

    /// Reload on every change signal until all receivers are dropped.
    ///
    /// The watcher task is aborted on the way out, which drops the notify
    /// backend with it.
    pub(super) async fn run_watch_loop(&self, config_tx: watch::Sender<Config>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        let watch_task = tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            tokio::select! {
                _ = config_tx.closed() => {
                    info!("all config receivers dropped, stopping reload manager");
                    break;
                }
                change = change_rx.recv() => match change {
                    Ok(()) => {
                        info!("reloading config from {}", self.config_path.display());
                        match self.reload() {
                            Ok(config) => {
                                if config_tx.send(config).is_err() {
                                    info!("all config receivers dropped, stopping reload manager");
                                    break;
                                }
                            }
                            Err(e) => warn!("config reload rejected: {e}"),
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("config watcher lagged by {n} events");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        info!("config watcher channel closed");
                        break;
                    }
                },
            }
        }

        watch_task.abort();
    }
}

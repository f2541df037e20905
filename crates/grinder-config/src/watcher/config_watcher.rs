use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use grinder_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a watcher for the given config file path.
    ///
    /// The file does not have to exist yet; its creation counts as a change.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the notify backend goes away, sending `()` on `tx` once
    /// per debounced burst of changes to the file.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridges the synchronous notify callback into the async loop below.
        let (event_tx, mut event_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches_file(&event, &file_name) => {
                    debug!("config file change detected");
                    let _ = event_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

        while event_rx.recv().await.is_some() {
            // Coalesce everything that arrives within the debounce window.
            let deadline = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(deadline);
            loop {
                tokio::select! {
                    _ = &mut deadline => break,
                    more = event_rx.recv() => {
                        if more.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether a notify event is a write to or creation of `file_name`.
fn touches_file(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}

#[cfg(test)]
pub(super) fn event_touches_file(event: &Event, file_name: &str) -> bool {
    touches_file(event, &OsString::from(file_name))
}

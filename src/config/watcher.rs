//! Catalog file watcher for hot reload.
//!
//! The parent directory is watched rather than the file itself: editors and
//! ConfigMap mounts replace the file by renaming over it, which would drop
//! a watch held on the old inode. Every change in the directory triggers a
//! reload, and only catalogs that differ from the last one published are
//! sent.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_catalog;
use crate::config::schema::LogosConfig;
use crate::logos::LogoCatalog;

/// A watcher that monitors the logo catalog file for changes.
pub struct ConfigWatcher {
    logos: LogosConfig,
    update_tx: mpsc::UnboundedSender<LogoCatalog>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for catalog updates.
    pub fn new(logos: LogosConfig) -> (Self, mpsc::UnboundedReceiver<LogoCatalog>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (Self { logos, update_tx }, update_rx)
    }

    /// Start watching the catalog file in a background thread.
    ///
    /// The returned watcher must be kept alive for updates to flow.
    /// Returns `Ok(None)` when no catalog file is configured.
    pub fn run(self) -> Result<Option<RecommendedWatcher>, notify::Error> {
        let Some(path) = self.logos.catalog_file.clone() else {
            return Ok(None);
        };
        let dir = watch_dir(&path);
        let tx = self.update_tx;
        let logos = self.logos;
        let watched: PathBuf = path.clone();
        let mut last_sent: Option<LogoCatalog> = None;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    match load_catalog(&logos) {
                        Ok(catalog) => {
                            if last_sent.as_ref() == Some(&catalog) {
                                return;
                            }
                            tracing::info!(
                                path = ?watched,
                                "Custom logo catalog changed, reloading"
                            );
                            last_sent = Some(catalog.clone());
                            let _ = tx.send(catalog);
                        }
                        Err(e) => {
                            tracing::error!(
                                path = ?watched,
                                error = %e,
                                "Failed to reload custom logo catalog, keeping current catalog"
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, dir = ?dir, "Custom logo catalog watcher started");
        Ok(Some(watcher))
    }
}

/// Directory holding the catalog file; `.` for a bare file name.
fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

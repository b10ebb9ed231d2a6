//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the served catalog from validated configuration
//! - Start background tasks (metrics exporter, catalog watcher)
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::{load_catalog, ConfigError, ConfigWatcher, ServerConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start every subsystem and serve until shutdown.
pub async fn run(config: ServerConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let catalog = load_catalog(&config.logos)?;
    tracing::info!(
        groups = catalog.groups().len(),
        logos = catalog.len(),
        "Custom logo catalog loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // The watcher handle must outlive the server; dropping it stops the watch.
    let (_watcher, catalog_updates) = if config.logos.watch {
        let (watcher, updates) = ConfigWatcher::new(config.logos.clone());
        (watcher.run()?, updates)
    } else {
        let (_, updates) = mpsc::unbounded_channel();
        (None, updates)
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config, catalog);
    server.run(listener, catalog_updates, shutdown.subscribe()).await?;
    Ok(())
}

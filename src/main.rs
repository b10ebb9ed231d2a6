//! Custom logo server.
//!
//! Serves administrator-supplied masthead and favicon logos per theme.
//!
//! ```text
//!   GET /custom-logo?type=masthead&theme=dark-theme
//!        │
//!        ▼
//!   ┌──────────┐   ┌───────────────┐   ┌──────────────┐
//!   │  server  │──▶│    handler    │──▶│   catalog    │──▶ ServeFile(path)
//!   │ (axum)   │   │ parse + check │   │ first match  │
//!   └──────────┘   └───────────────┘   └──────▲───────┘
//!                                             │ ArcSwap
//!                                      ┌──────┴───────┐
//!                                      │ config/watch │ ◀── catalog.json
//!                                      └──────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use custom_logos::config::{load_config, ServerConfig};
use custom_logos::lifecycle::{startup, Shutdown};
use custom_logos::observability::logging;

#[derive(Parser)]
#[command(name = "custom-logos")]
#[command(about = "Serve custom masthead and favicon logos", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `logos.catalog_file`.
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Reload the catalog file when it changes.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(catalog_file) = args.catalog_file {
        config.logos.catalog_file = Some(catalog_file);
    }
    config.logos.watch |= args.watch;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("custom-logos v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        logo_path = %config.server.logo_path,
        catalog_file = ?config.logos.catalog_file,
        on_missing = ?config.logos.on_missing,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

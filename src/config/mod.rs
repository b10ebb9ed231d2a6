//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + optional catalog file (JSON)
//!     → loader.rs (parse & deserialize, strict logo literals)
//!     → validation.rs (semantic checks)
//!     → ServerConfig + LogoCatalog (validated, immutable)
//!     → catalog published via ArcSwap to the handler
//!
//! On catalog file change:
//!     watcher.rs detects change
//!     → loader.rs loads new catalog
//!     → validation.rs validates
//!     → atomic swap of Arc<LogoCatalog>
//!     → next request observes new catalog
//! ```
//!
//! # Design Decisions
//! - Catalog is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - A failed reload keeps the previous catalog

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_catalog, load_config, ConfigError};
pub use schema::{
    HttpConfig, ListenerConfig, LogosConfig, MissingLogoPolicy, ObservabilityConfig, ServerConfig,
};
pub use watcher::ConfigWatcher;

//! Custom logo server library.
//!
//! Resolves a `(type, theme)` request against an administrator-supplied
//! catalog and streams the matching file.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod logos;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use logos::{LogoCatalog, LogoTheme, LogoType};

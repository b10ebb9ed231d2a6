//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handler.rs (method check, query parsing, catalog lookup)
//!     → ServeFile (content type, ranges, conditional requests)
//!       or error.rs (JSON error body)
//!     → Send to client
//! ```

pub mod error;
pub mod handler;
pub mod server;

pub use error::ApiError;
pub use handler::custom_logo_handler;
pub use server::{build_router, AppState, HttpServer};

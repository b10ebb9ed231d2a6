//! Custom logo subsystem.
//!
//! # Data Flow
//! ```text
//! query string / config document
//!     → types.rs (strict parse into LogoType / LogoTheme)
//!     → catalog.rs (first-match lookup over LogoGroup[])
//!     → LogoFile (theme + path on disk)
//! ```

pub mod catalog;
pub mod types;

pub use catalog::{LogoCatalog, LogoFile, LogoGroup};
pub use types::{LogoTheme, LogoType, ParseError};

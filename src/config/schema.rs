//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the logo
//! server. All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logos::LogoCatalog;

/// Root configuration for the logo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// HTTP surface settings.
    pub server: HttpConfig,

    /// Logo catalog sources and lookup policy.
    pub logos: LogosConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9000".to_string(),
        }
    }
}

/// HTTP surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Path the logo handler is mounted at.
    pub logo_path: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            logo_path: "/custom-logo".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// What to answer when a valid request matches no configured logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MissingLogoPolicy {
    /// `200 OK` with an empty body.
    #[default]
    Empty,
    /// `404 Not Found` with a JSON error body.
    NotFound,
}

/// Logo catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LogosConfig {
    /// JSON catalog file, loaded after the inline entries.
    pub catalog_file: Option<PathBuf>,

    /// Reload `catalog_file` when it changes.
    pub watch: bool,

    /// Response for unmatched lookups.
    pub on_missing: MissingLogoPolicy,

    /// Inline catalog entries (`[[logos.catalog]]`).
    pub catalog: LogoCatalog,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

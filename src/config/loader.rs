//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{LogosConfig, ServerConfig};
use crate::config::validation::{validate_catalog, validate_config, ValidationError};
use crate::logos::LogoCatalog;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load a JSON catalog document.
pub fn load_catalog_file(path: &Path) -> Result<LogoCatalog, ConfigError> {
    let content = fs::read_to_string(path)?;
    let catalog = LogoCatalog::from_json(&content)?;

    validate_catalog(&catalog).map_err(ConfigError::Validation)?;

    Ok(catalog)
}

/// Build the served catalog: inline entries first, then the catalog file.
pub fn load_catalog(logos: &LogosConfig) -> Result<LogoCatalog, ConfigError> {
    let mut catalog = logos.catalog.clone();
    if let Some(path) = &logos.catalog_file {
        catalog = catalog.merged(load_catalog_file(path)?);
    }

    for (logo_type, theme) in catalog.duplicates() {
        tracing::warn!(
            logo_type = %logo_type,
            theme = %theme,
            "Custom logo configured more than once, only the first entry is served"
        );
    }

    Ok(catalog)
}

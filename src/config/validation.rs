//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic, including the logo literals)
//! - Validate addresses and the handler mount path
//! - Check every catalog entry points at a usable path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate (type, theme) pairs are not errors; the first entry is served
//! - File existence is not checked: logos may appear after startup

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::logos::{LogoCatalog, LogoTheme, LogoType};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid socket address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("server.logo_path must start with '/': {0:?}")]
    InvalidLogoPath(String),

    #[error("custom logo group {0} has no logos")]
    EmptyGroup(LogoType),

    #[error("custom logo {logo_type}/{theme} has an empty path")]
    EmptyPath { logo_type: LogoType, theme: LogoTheme },

    #[error("custom logo {logo_type}/{theme} path is not absolute: {path:?}")]
    RelativePath {
        logo_type: LogoType,
        theme: LogoTheme,
        path: PathBuf,
    },
}

/// Validate a full server configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if !config.server.logo_path.starts_with('/') {
        errors.push(ValidationError::InvalidLogoPath(config.server.logo_path.clone()));
    }

    errors.extend(catalog_errors(&config.logos.catalog));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a catalog on its own (used for catalog files and reloads).
pub fn validate_catalog(catalog: &LogoCatalog) -> Result<(), Vec<ValidationError>> {
    let errors = catalog_errors(catalog);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn catalog_errors(catalog: &LogoCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for group in catalog.groups() {
        if group.logos.is_empty() {
            errors.push(ValidationError::EmptyGroup(group.logo_type));
        }
        for logo in &group.logos {
            if logo.path.as_os_str().is_empty() {
                errors.push(ValidationError::EmptyPath {
                    logo_type: group.logo_type,
                    theme: logo.theme,
                });
            } else if !logo.path.is_absolute() {
                errors.push(ValidationError::RelativePath {
                    logo_type: group.logo_type,
                    theme: logo.theme,
                    path: logo.path.clone(),
                });
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logos::{LogoFile, LogoGroup};

    fn catalog_with(path: &str) -> LogoCatalog {
        LogoCatalog::new(vec![LogoGroup {
            logo_type: LogoType::Masthead,
            logos: vec![LogoFile {
                theme: LogoTheme::Dark,
                path: PathBuf::from(path),
            }],
        }])
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".to_string();
        config.server.logo_path = "custom-logo".to_string();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nope".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::InvalidLogoPath("custom-logo".to_string())));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_catalog_paths() {
        assert_eq!(validate_catalog(&catalog_with("/logos/dark.svg")), Ok(()));

        assert_eq!(
            validate_catalog(&catalog_with("")),
            Err(vec![ValidationError::EmptyPath {
                logo_type: LogoType::Masthead,
                theme: LogoTheme::Dark,
            }])
        );

        assert_eq!(
            validate_catalog(&catalog_with("logos/dark.svg")),
            Err(vec![ValidationError::RelativePath {
                logo_type: LogoType::Masthead,
                theme: LogoTheme::Dark,
                path: PathBuf::from("logos/dark.svg"),
            }])
        );
    }

    #[test]
    fn test_empty_group() {
        let catalog = LogoCatalog::new(vec![LogoGroup {
            logo_type: LogoType::Favicon,
            logos: Vec::new(),
        }]);
        assert_eq!(
            validate_catalog(&catalog),
            Err(vec![ValidationError::EmptyGroup(LogoType::Favicon)])
        );
    }

    #[test]
    fn test_duplicates_are_valid() {
        let catalog = catalog_with("/a.svg").merged(catalog_with("/b.svg"));
        assert_eq!(validate_catalog(&catalog), Ok(()));
    }
}

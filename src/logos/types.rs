//! Logo vocabulary: where a logo is placed and which theme it is drawn for.
//!
//! Both enums are closed sets. Every string entry point (query parsing,
//! document decoding, flag assignment) goes through the `ALL` table of the
//! enum, so adding a variant only touches the enum and its table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Rejected vocabulary literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown custom logo type: \"{0}\". Must be one of [masthead, favicon]")]
    InvalidType(String),

    #[error("unknown custom logo theme: \"{0}\". Must be one of [dark-theme, light-theme]")]
    InvalidTheme(String),
}

/// Placement of a logo in the console UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogoType {
    /// Banner logo in the page header.
    #[default]
    Masthead,
    /// Browser tab icon.
    Favicon,
}

impl LogoType {
    /// Every placement, in canonical order.
    pub const ALL: [LogoType; 2] = [LogoType::Masthead, LogoType::Favicon];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoType::Masthead => "masthead",
            LogoType::Favicon => "favicon",
        }
    }

    /// Flag-style assignment.
    ///
    /// An empty value leaves `self` unchanged so an unset flag keeps its
    /// default. Any other value must be an exact literal.
    pub fn set(&mut self, value: &str) -> Result<(), ParseError> {
        if value.is_empty() {
            return Ok(());
        }
        *self = value.parse()?;
        Ok(())
    }
}

impl FromStr for LogoType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::InvalidType(s.to_string()))
    }
}

impl fmt::Display for LogoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color scheme a logo asset is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoTheme {
    Dark,
    Light,
}

impl LogoTheme {
    /// Every theme, in canonical order.
    pub const ALL: [LogoTheme; 2] = [LogoTheme::Dark, LogoTheme::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoTheme::Dark => "dark-theme",
            LogoTheme::Light => "light-theme",
        }
    }
}

impl FromStr for LogoTheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::InvalidTheme(s.to_string()))
    }
}

impl fmt::Display for LogoTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Document decoding is as strict as query parsing: no trimming, no case folding.

impl<'de> Deserialize<'de> for LogoType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for LogoType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogoTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for LogoTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

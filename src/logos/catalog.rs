//! Configured logo files and their lookup.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logos::types::{LogoTheme, LogoType};

/// One file drawn for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogoFile {
    pub theme: LogoTheme,
    pub path: PathBuf,
}

/// All theme variants configured for one placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogoGroup {
    #[serde(rename = "type")]
    pub logo_type: LogoType,

    #[serde(default)]
    pub logos: Vec<LogoFile>,
}

/// Ordered list of logo groups.
///
/// Immutable once built. Hot reload replaces the whole catalog instead of
/// editing it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LogoCatalog {
    groups: Vec<LogoGroup>,
}

impl LogoCatalog {
    pub fn new(groups: Vec<LogoGroup>) -> Self {
        Self { groups }
    }

    /// Decode the JSON document form:
    /// `[{"type": "masthead", "logos": [{"theme": "dark-theme", "path": "/logo.svg"}]}]`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn groups(&self) -> &[LogoGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.logos.is_empty())
    }

    /// Number of configured files across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.logos.len()).sum()
    }

    /// First file matching both keys, in group order then file order.
    /// Later duplicates are never returned.
    pub fn find(&self, logo_type: LogoType, theme: LogoTheme) -> Option<&LogoFile> {
        self.groups
            .iter()
            .filter(|g| g.logo_type == logo_type)
            .flat_map(|g| g.logos.iter())
            .find(|l| l.theme == theme)
    }

    /// `(type, theme)` pairs configured more than once, each listed once,
    /// in order of their second occurrence.
    pub fn duplicates(&self) -> Vec<(LogoType, LogoTheme)> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for group in &self.groups {
            for logo in &group.logos {
                let key = (group.logo_type, logo.theme);
                if !seen.insert(key) && !dups.contains(&key) {
                    dups.push(key);
                }
            }
        }
        dups
    }

    /// Concatenate two catalogs, `self` first.
    pub fn merged(mut self, other: LogoCatalog) -> Self {
        self.groups.extend(other.groups);
        self
    }
}

impl From<Vec<LogoGroup>> for LogoCatalog {
    fn from(groups: Vec<LogoGroup>) -> Self {
        Self::new(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(theme: LogoTheme, path: &str) -> LogoFile {
        LogoFile { theme, path: PathBuf::from(path) }
    }

    fn group(logo_type: LogoType, logos: Vec<LogoFile>) -> LogoGroup {
        LogoGroup { logo_type, logos }
    }

    #[test]
    fn test_find_matches_type_and_theme() {
        let catalog = LogoCatalog::new(vec![
            group(
                LogoType::Masthead,
                vec![
                    file(LogoTheme::Dark, "/m-dark.svg"),
                    file(LogoTheme::Light, "/m-light.svg"),
                ],
            ),
            group(LogoType::Favicon, vec![file(LogoTheme::Dark, "/f-dark.png")]),
        ]);

        assert_eq!(
            catalog.find(LogoType::Masthead, LogoTheme::Light).map(|l| l.path.as_path()),
            Some(std::path::Path::new("/m-light.svg"))
        );
        assert_eq!(
            catalog.find(LogoType::Favicon, LogoTheme::Dark).map(|l| l.path.as_path()),
            Some(std::path::Path::new("/f-dark.png"))
        );
        assert!(catalog.find(LogoType::Favicon, LogoTheme::Light).is_none());
    }

    #[test]
    fn test_find_first_match_wins() {
        let catalog = LogoCatalog::new(vec![
            group(
                LogoType::Masthead,
                vec![
                    file(LogoTheme::Dark, "/first.svg"),
                    file(LogoTheme::Dark, "/second.svg"),
                ],
            ),
            group(LogoType::Masthead, vec![file(LogoTheme::Dark, "/third.svg")]),
        ]);

        let found = catalog.find(LogoType::Masthead, LogoTheme::Dark).unwrap();
        assert_eq!(found.path, PathBuf::from("/first.svg"));
    }

    #[test]
    fn test_find_searches_later_groups_of_same_type() {
        let catalog = LogoCatalog::new(vec![
            group(LogoType::Masthead, vec![file(LogoTheme::Dark, "/dark.svg")]),
            group(LogoType::Masthead, vec![file(LogoTheme::Light, "/light.svg")]),
        ]);

        let found = catalog.find(LogoType::Masthead, LogoTheme::Light).unwrap();
        assert_eq!(found.path, PathBuf::from("/light.svg"));
    }

    #[test]
    fn test_find_on_empty_catalog() {
        let catalog = LogoCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find(LogoType::Masthead, LogoTheme::Dark).is_none());
    }

    #[test]
    fn test_duplicates() {
        let catalog = LogoCatalog::new(vec![
            group(
                LogoType::Masthead,
                vec![
                    file(LogoTheme::Dark, "/a.svg"),
                    file(LogoTheme::Dark, "/b.svg"),
                ],
            ),
            group(LogoType::Favicon, vec![file(LogoTheme::Dark, "/c.svg")]),
            group(LogoType::Masthead, vec![file(LogoTheme::Dark, "/d.svg")]),
        ]);

        assert_eq!(catalog.duplicates(), vec![(LogoType::Masthead, LogoTheme::Dark)]);
    }

    #[test]
    fn test_from_json_document() {
        let catalog = LogoCatalog::from_json(
            r#"[
                {"type": "masthead", "logos": [
                    {"theme": "dark-theme", "path": "/logos/dark.svg"},
                    {"theme": "light-theme", "path": "/logos/light.svg"}
                ]},
                {"type": "favicon", "logos": [{"theme": "dark-theme", "path": "/logos/fav.png"}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.groups().len(), 2);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.groups()[1].logo_type, LogoType::Favicon);
    }

    #[test]
    fn test_from_json_rejects_unknown_literal() {
        let err = LogoCatalog::from_json(
            r#"[{"type": "Masthead", "logos": [{"theme": "dark-theme", "path": "/a"}]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown custom logo type: \"Masthead\""));

        let err = LogoCatalog::from_json(
            r#"[{"type": "masthead", "logos": [{"theme": "dark", "path": "/a"}]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown custom logo theme: \"dark\""));
    }

    #[test]
    fn test_merged_keeps_order() {
        let inline = LogoCatalog::new(vec![group(
            LogoType::Masthead,
            vec![file(LogoTheme::Dark, "/inline.svg")],
        )]);
        let from_file = LogoCatalog::new(vec![group(
            LogoType::Masthead,
            vec![file(LogoTheme::Dark, "/file.svg")],
        )]);

        let merged = inline.merged(from_file);
        assert_eq!(merged.groups().len(), 2);
        assert_eq!(
            merged.find(LogoType::Masthead, LogoTheme::Dark).unwrap().path,
            PathBuf::from("/inline.svg")
        );
    }
}

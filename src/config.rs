//! Startup seed for a session.
//!
//! A session normally starts from the built-in example bookmarks and the
//! default dark theme. A JSON file can replace either part:
//!
//! ```json
//! {
//!   "bookmarks": [
//!     { "id": 1, "name": "Docs", "url": "https://docs.rs", "icon": "📚" }
//!   ],
//!   "theme": { "isDark": false }
//! }
//! ```
//!
//! Missing fields fall back to the defaults. The file is only read; the
//! session never writes anything back.

use crate::bookmark::{default_seed, BookmarkEntry};
use crate::error::{Result, StartPageError};
use crate::form::DEFAULT_ICON;
use crate::theme::ThemeState;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A bookmark as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBookmark {
    /// Explicit id; positional ids are used when omitted.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub url: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Initial state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub bookmarks: Vec<SeedBookmark>,
    pub theme: ThemeState,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bookmarks: default_seed()
                .into_iter()
                .map(|b| SeedBookmark {
                    id: Some(b.id),
                    name: b.name,
                    url: b.url,
                    icon: b.icon,
                })
                .collect(),
            theme: ThemeState::default(),
        }
    }
}

impl SessionConfig {
    /// Parses a seed from JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid session config JSON")
    }

    /// Reads a seed file.
    pub fn load(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|json| Self::from_json(&json))
            .map_err(|source| StartPageError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            bookmarks = config.bookmarks.len(),
            "loaded session config"
        );
        Ok(config)
    }

    /// Seed bookmarks with ids filled in.
    ///
    /// Bookmarks without an id get their 1-based position.
    pub fn seed_entries(&self) -> Vec<BookmarkEntry> {
        self.bookmarks
            .iter()
            .enumerate()
            .map(|(i, b)| BookmarkEntry {
                id: b.id.unwrap_or(i as u64 + 1),
                name: b.name.clone(),
                url: b.url.clone(),
                icon: b.icon.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin_seed() {
        let config = SessionConfig::default();
        assert_eq!(config.seed_entries(), default_seed());
        assert_eq!(config.theme, ThemeState::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(r#"{ "theme": { "isDark": false } }"#).unwrap();
        assert_eq!(config.bookmarks.len(), 3);
        assert!(!config.theme.is_dark);
        assert_eq!(config.theme.name, "dark");
    }

    #[test]
    fn test_bookmarks_without_ids_or_icons() {
        let config = SessionConfig::from_json(
            r#"{ "bookmarks": [
                { "name": "Docs", "url": "https://docs.rs" },
                { "name": "Crates", "url": "https://crates.io", "icon": "📦" }
            ] }"#,
        )
        .unwrap();
        let entries = config.seed_entries();
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].icon, DEFAULT_ICON);
        assert_eq!(entries[1].id, 2);
        assert_eq!(entries[1].icon, "📦");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SessionConfig::from_json("{ bookmarks: ").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("rstartpage_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(SessionConfig::load(&path), Err(StartPageError::Config { .. })));
    }
}

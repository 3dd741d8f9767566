//! The session context.
//!
//! One [`Session`] owns the bookmark collection and the theme record for the
//! lifetime of the program. Whoever needs to read or change either gets it by
//! reference; there is no global state.

use crate::bookmark::{BookmarkEntry, BookmarkId, BookmarkStore, NewBookmark};
use crate::config::SessionConfig;
use crate::theme::ThemeState;

/// Bookmarks and theme of the running session.
#[derive(Debug, Clone)]
pub struct Session {
    pub bookmarks: BookmarkStore,
    theme: ThemeState,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session from a startup seed.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            bookmarks: BookmarkStore::with_entries(config.seed_entries()),
            theme: config.theme.clone(),
        }
    }

    // ===== Theme =====

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Replaces the whole theme record.
    pub fn replace_theme(&mut self, theme: ThemeState) {
        self.theme = theme;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggle_dark_mode();
    }

    pub fn set_background(&mut self, source: impl Into<String>, is_custom: bool) {
        self.theme = self.theme.set_background(source, is_custom);
    }

    // ===== Bookmarks =====

    pub fn add_bookmark(&mut self, candidate: NewBookmark) -> BookmarkEntry {
        self.bookmarks.add(candidate)
    }

    pub fn remove_bookmark(&mut self, id: BookmarkId) -> bool {
        self.bookmarks.remove(id)
    }

    pub fn search(&self, query: &str) -> Vec<&BookmarkEntry> {
        self.bookmarks.search(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::new();
        assert_eq!(session.bookmarks.len(), 3);
        assert!(session.theme().is_dark);
    }

    #[test]
    fn test_theme_and_bookmarks_are_independent() {
        let mut session = Session::new();
        let before = session.bookmarks.entries().to_vec();
        session.toggle_dark_mode();
        session.set_background("https://example.com/bg.png", true);
        assert_eq!(session.bookmarks.entries(), before.as_slice());

        let theme = session.theme().clone();
        let added = session.add_bookmark(NewBookmark::new("Docs", "https://docs.google.com", "📄"));
        session.remove_bookmark(added.id);
        assert_eq!(session.theme(), &theme);
    }

    #[test]
    fn test_replace_theme() {
        let mut session = Session::new();
        let light = session.theme().toggle_dark_mode();
        session.replace_theme(light.clone());
        assert_eq!(session.theme(), &light);
    }
}

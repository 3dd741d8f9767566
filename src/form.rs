//! Add-bookmark form state.
//!
//! Holds the three input buffers of the "Add New Website" dialog. The only
//! validation is that name and URL are not blank; everything else is
//! accepted as typed.

use crate::bookmark::{BookmarkEntry, BookmarkStore, NewBookmark};
use tracing::debug;

/// Icon used when the icon field is left empty.
pub const DEFAULT_ICON: &str = "🌐";

/// Input buffers of the add-bookmark dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkForm {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl Default for BookmarkForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl BookmarkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both required fields hold something besides whitespace.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// Builds the bookmark the form currently describes, if it is valid.
    ///
    /// Name, URL and icon are trimmed of surrounding whitespace; a blank icon
    /// becomes [`DEFAULT_ICON`].
    pub fn candidate(&self) -> Option<NewBookmark> {
        if !self.can_submit() {
            return None;
        }
        let icon = match self.icon.trim() {
            "" => DEFAULT_ICON,
            icon => icon,
        };
        Some(NewBookmark::new(self.name.trim(), self.url.trim(), icon))
    }

    /// Adds the described bookmark to `store` and resets the form.
    ///
    /// An invalid form is left as-is and nothing is added.
    pub fn submit(&mut self, store: &mut BookmarkStore) -> Option<BookmarkEntry> {
        let Some(candidate) = self.candidate() else {
            debug!("bookmark form rejected: name or url is empty");
            return None;
        };
        let entry = store.add(candidate);
        self.reset();
        Some(entry)
    }

    /// Discards the typed input without touching any store.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, url: &str, icon: &str) -> BookmarkForm {
        BookmarkForm {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let form = BookmarkForm::new();
        assert!(form.name.is_empty());
        assert!(form.url.is_empty());
        assert_eq!(form.icon, DEFAULT_ICON);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_adds_and_clears() {
        let mut store = BookmarkStore::new();
        let mut form = filled("Docs", "https://docs.google.com", "📄");
        let entry = form.submit(&mut store).unwrap();
        assert_eq!(entry.name, "Docs");
        assert_eq!(entry.icon, "📄");
        assert_eq!(store.entries(), &[entry]);
        assert_eq!(form, BookmarkForm::default());
    }

    #[test]
    fn test_submit_rejects_missing_fields() {
        let mut store = BookmarkStore::new();
        for (name, url) in [("", "https://a.example"), ("A", ""), ("   ", "https://a.example"), ("A", " \t")] {
            let mut form = filled(name, url, "⭐");
            assert!(form.submit(&mut store).is_none());
            // Rejected input stays in place for the user to fix
            assert_eq!(form.name, name);
            assert_eq!(form.url, url);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_icon_uses_placeholder() {
        let mut store = BookmarkStore::new();
        let mut form = filled("Blog", "https://blog.example", "  ");
        let entry = form.submit(&mut store).unwrap();
        assert_eq!(entry.icon, DEFAULT_ICON);
    }

    #[test]
    fn test_candidate_trims_input() {
        let form = filled("  Docs ", " https://docs.google.com\t", " 📄 ");
        let candidate = form.candidate().unwrap();
        assert_eq!(candidate, NewBookmark::new("Docs", "https://docs.google.com", "📄"));
    }

    #[test]
    fn test_any_icon_string_is_accepted() {
        let form = filled("Wiki", "https://wiki.example", "WIKI");
        assert_eq!(form.candidate().unwrap().icon, "WIKI");
    }

    #[test]
    fn test_cancel_discards_input() {
        let mut store = BookmarkStore::with_default_seed();
        let mut form = filled("Half typed", "https://", "🙂");
        form.cancel();
        assert_eq!(form, BookmarkForm::default());
        assert_eq!(store.len(), 3);
        assert!(form.submit(&mut store).is_none());
    }
}

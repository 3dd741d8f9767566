//! Bookmark collection for the start page.
//!
//! The store keeps bookmarks in insertion order and hands out ids that are
//! unique for the whole session. Ids are derived from the wall clock in
//! milliseconds, but never go backwards: each new id is strictly greater than
//! every id the store has seen, so removing an entry never frees its id.
//! Only when a seed already holds `u64::MAX` does the store fall back to the
//! lowest id not currently in use.
//!
//! # Examples
//!
//! ```
//! use rstartpage::bookmark::{BookmarkStore, NewBookmark};
//!
//! let mut store = BookmarkStore::with_default_seed();
//! let docs = store.add(NewBookmark::new("Docs", "https://docs.google.com", "📄"));
//! let names: Vec<_> = store.search("d").iter().map(|b| b.name.as_str()).collect();
//! assert_eq!(names, ["Drive", "Docs"]);
//! store.remove(docs.id);
//! assert_eq!(store.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Identifier of a bookmark, unique within a session.
pub type BookmarkId = u64;

/// A single website shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub id: BookmarkId,
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// A bookmark that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl NewBookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered, in-memory bookmark collection.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    entries: Vec<BookmarkEntry>,
    /// Highest id ever assigned or seeded; never decreases.
    last_id: BookmarkId,
}

impl BookmarkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three built-in example bookmarks.
    pub fn with_default_seed() -> Self {
        Self::with_entries(default_seed())
    }

    /// Creates a store from seed entries, keeping their order.
    ///
    /// Seed ids are kept as given unless one repeats an earlier id, in which
    /// case the duplicate gets a fresh id.
    pub fn with_entries(seed: impl IntoIterator<Item = BookmarkEntry>) -> Self {
        let mut store = Self::new();
        for mut entry in seed {
            if store.get(entry.id).is_some() {
                entry.id = store.next_id();
            }
            store.last_id = store.last_id.max(entry.id);
            store.entries.push(entry);
        }
        store
    }

    // ===== Queries =====

    /// All bookmarks in insertion order.
    pub fn entries(&self) -> &[BookmarkEntry] {
        &self.entries
    }

    pub fn get(&self, id: BookmarkId) -> Option<&BookmarkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns bookmarks whose name contains `query`, ignoring case.
    ///
    /// Results keep insertion order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&BookmarkEntry> {
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    // ===== Mutations =====

    /// Stores a new bookmark at the end of the collection and returns it.
    pub fn add(&mut self, candidate: NewBookmark) -> BookmarkEntry {
        let entry = BookmarkEntry {
            id: self.next_id(),
            name: candidate.name,
            url: candidate.url,
            icon: candidate.icon,
        };
        debug!(id = entry.id, name = %entry.name, "bookmark added");
        self.entries.push(entry.clone());
        entry
    }

    /// Removes the bookmark with `id`. Unknown ids are ignored.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: BookmarkId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        debug!(id, removed, "bookmark remove requested");
        removed
    }

    fn next_id(&mut self) -> BookmarkId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as BookmarkId)
            .unwrap_or(0);
        match self.last_id.checked_add(1) {
            Some(next) => {
                self.last_id = now.max(next);
                self.last_id
            }
            // Seeded ids reached the top of the range; fill the lowest gap
            None => (1..=BookmarkId::MAX)
                .find(|id| self.get(*id).is_none())
                .unwrap_or_default(),
        }
    }
}

/// The example bookmarks every fresh session starts with.
pub fn default_seed() -> Vec<BookmarkEntry> {
    vec![
        BookmarkEntry {
            id: 1,
            name: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            icon: "🐱".to_string(),
        },
        BookmarkEntry {
            id: 2,
            name: "Gmail".to_string(),
            url: "https://gmail.com".to_string(),
            icon: "📧".to_string(),
        },
        BookmarkEntry {
            id: 3,
            name: "Drive".to_string(),
            url: "https://drive.google.com".to_string(),
            icon: "📁".to_string(),
        },
    ]
}

//! UI state modules for the start page.
//!
//! This module contains state-only logic (no rendering):
//! - Search state (live filter query)
//! - Overlay state (add-bookmark modal, background picker popup)
//!
//! Bookmarks and theme are not here; they belong to the session context.

mod search_state;
mod overlay_state;

pub use search_state::SearchState;
pub use overlay_state::OverlayState;

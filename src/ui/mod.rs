//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the start page:
//! - Header (add button, background picker toggle, dark/light toggle)
//! - Search bar (live query)
//! - Bookmark grid (filtered cards with open/remove actions)
//! - Footer (counts, background source, attribution)
//! - Add-bookmark modal
//! - Background picker popup
//! - Panel manager (layout and interaction routing)

pub mod header;
pub mod search_bar;
pub mod bookmark_grid;
pub mod footer;
pub mod add_bookmark_modal;
pub mod background_picker;
pub mod panel_manager;

//! Centralized application state for the start page.
//!
//! The session (bookmarks + theme) is the single source of truth. Everything
//! else here is input buffers and overlay flags that the panels edit while
//! the user types.

use rstartpage::{BackgroundPicker, BookmarkForm, Session, SessionConfig, ThemeManager};
use crate::state::{OverlayState, SearchState};

/// Main application state.
pub struct AppState {
    /// Bookmarks and theme for this run
    pub session: Session,

    /// Search box query
    pub search: SearchState,

    /// Modal and popup visibility
    pub overlays: OverlayState,

    /// Add-bookmark dialog input
    pub form: BookmarkForm,

    /// Background picker input
    pub picker: BackgroundPicker,

    /// Light/Dark palettes
    pub themes: ThemeManager,

    /// Message from the last recovered failure (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a state seeded with the built-in bookmarks and theme.
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    /// Creates a state from a startup seed.
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            session: Session::from_config(config),
            search: SearchState::new(),
            overlays: OverlayState::new(),
            form: BookmarkForm::new(),
            picker: BackgroundPicker::new(),
            themes: ThemeManager::new(),
            error_message: None,
        }
    }

    /// Palette matching the current dark/light flag.
    pub fn palette(&self) -> &rstartpage::ThemeColors {
        self.themes.palette(self.session.theme().is_dark)
    }
}

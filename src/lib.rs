pub mod error;
pub mod bookmark;
pub mod theme;
pub mod data_uri;
pub mod form;
pub mod picker;
pub mod config;
pub mod session;

// Export error types
pub use error::{StartPageError, Result};

// Export bookmark collection
pub use bookmark::{BookmarkEntry, BookmarkId, BookmarkStore, NewBookmark, default_seed};

// Export theme support
pub use theme::{
    ThemeState, ThemeColors, ThemeManager, DEFAULT_BACKGROUND,
    hex_to_color32, adjust_brightness, with_alpha
};

// Export input components
pub use form::{BookmarkForm, DEFAULT_ICON};
pub use picker::BackgroundPicker;

// Export session context
pub use config::{SessionConfig, SeedBookmark};
pub use session::Session;

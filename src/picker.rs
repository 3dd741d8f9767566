//! Background picker logic.
//!
//! Two ways in: a typed URL, or a local image file that has already been
//! read and encoded by [`crate::data_uri::read_image_file`]. Either path ends
//! in [`ThemeState::set_background`] with the custom flag set. Failures never
//! touch the theme.

use crate::error::StartPageError;
use crate::theme::ThemeState;
use tracing::warn;

/// Input state of the background picker popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundPicker {
    /// URL typed into the picker's text field.
    pub url: String,
}

impl BackgroundPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the typed URL as a custom background and clears the field.
    ///
    /// Returns the new theme, or `None` when the field is blank.
    pub fn submit_url(&mut self, theme: &ThemeState) -> Option<ThemeState> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let next = theme.set_background(url, true);
        self.url.clear();
        Some(next)
    }

    /// Applies the outcome of reading an uploaded background file.
    ///
    /// A failed read is logged and leaves the theme as it was.
    pub fn apply_upload(
        theme: &ThemeState,
        result: Result<String, StartPageError>,
    ) -> Option<ThemeState> {
        match result {
            Ok(data_uri) => Some(theme.set_background(data_uri, true)),
            Err(err) => {
                warn!(error = %err, "background upload ignored");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_submit_url_sets_custom_background() {
        let theme = ThemeState::default();
        let mut picker = BackgroundPicker {
            url: " https://example.com/sky.jpg ".to_string(),
        };
        let next = picker.submit_url(&theme).unwrap();
        assert_eq!(next.background, "https://example.com/sky.jpg");
        assert!(next.is_custom_background);
        assert_eq!(next.is_dark, theme.is_dark);
        assert!(picker.url.is_empty());
    }

    #[test]
    fn test_submit_blank_url_is_ignored() {
        let theme = ThemeState::default();
        let mut picker = BackgroundPicker { url: "   ".to_string() };
        assert!(picker.submit_url(&theme).is_none());
        assert_eq!(picker.url, "   ");
    }

    #[test]
    fn test_apply_upload_success() {
        let theme = ThemeState::default();
        let next = BackgroundPicker::apply_upload(&theme, Ok("data:image/png;base64,AAAA".to_string()))
            .unwrap();
        assert!(next.has_embedded_background());
        assert!(next.is_custom_background);
    }

    #[test]
    fn test_apply_upload_failure_keeps_theme() {
        let theme = ThemeState::default();
        let err = StartPageError::NotAnImage {
            path: PathBuf::from("notes.txt"),
        };
        assert!(BackgroundPicker::apply_upload(&theme, Err(err)).is_none());
    }
}

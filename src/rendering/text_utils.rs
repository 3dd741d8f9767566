//! Text rendering utilities
//!
//! Shared helpers for fitting bookmark text into cards.

use eframe::egui;

/// Strips the scheme and a trailing slash so cards show `github.com`
/// rather than `https://github.com/`.
pub fn display_url(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

/// Truncates text to fit within a given width, adding "…" if truncated
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `max_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
pub fn truncate_text_to_fit(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let measure = |s: String| {
        painter
            .layout_no_wrap(s, font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if max_width <= 0.0 {
        return String::new();
    }
    if measure(text.to_string()) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let available = max_width - measure(ellipsis.to_string());
    if available <= 0.0 {
        return String::new();
    }

    // Binary search on the number of leading chars that still fit
    let mut low = 0;
    let mut high = text.chars().count();
    while low < high {
        let mid = (low + high + 1) / 2;
        if measure(text.chars().take(mid).collect()) <= available {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(low).collect();
    result.push_str(ellipsis);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_url() {
        assert_eq!(display_url("https://github.com"), "github.com");
        assert_eq!(display_url("https://drive.google.com/"), "drive.google.com");
        assert_eq!(display_url("example.org/path"), "example.org/path");
    }
}

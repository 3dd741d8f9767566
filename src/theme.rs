//! Theme support for the start page
//!
//! This module holds the session's single [`ThemeState`] record (dark/light
//! flag and background source) together with the two color palettes the
//! presentation layer picks from to keep text and icons readable on top of
//! the background.
//!
//! # Examples
//!
//! ```
//! use rstartpage::theme::{ThemeState, ThemeManager};
//!
//! let theme = ThemeState::default();
//! let light = theme.toggle_dark_mode();
//! assert!(!light.is_dark);
//!
//! let manager = ThemeManager::new();
//! let palette = manager.palette(light.is_dark);
//! println!("Light card color: {:?}", palette.card_top);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Background used by a fresh session.
pub const DEFAULT_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1475274047050-1d0c0975c63e";

/// Current display theme of the session.
///
/// Operations never mutate in place; they return the replacement record and
/// the owner stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeState {
    /// Preset label, informational only.
    pub name: String,
    /// Remote image URL or embedded `data:` URI.
    pub background: String,
    pub is_dark: bool,
    /// Set once the user supplied their own background.
    pub is_custom_background: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            name: "dark".to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            is_dark: true,
            is_custom_background: false,
        }
    }
}

impl ThemeState {
    /// Returns a copy with the dark/light flag flipped.
    pub fn toggle_dark_mode(&self) -> ThemeState {
        let next = ThemeState {
            is_dark: !self.is_dark,
            ..self.clone()
        };
        info!(is_dark = next.is_dark, "dark mode toggled");
        next
    }

    /// Returns a copy with a new background source.
    pub fn set_background(&self, source: impl Into<String>, is_custom: bool) -> ThemeState {
        let next = ThemeState {
            background: source.into(),
            is_custom_background: is_custom,
            ..self.clone()
        };
        info!(
            is_custom,
            embedded = next.has_embedded_background(),
            "background changed"
        );
        next
    }

    /// True when the background is an embedded data URI rather than a URL.
    pub fn has_embedded_background(&self) -> bool {
        crate::data_uri::is_data_uri(&self.background)
    }
}

/// Complete color palette for one display variant
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Page colors
    pub page_background: Color32,
    pub overlay: Color32,
    pub panel_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Controls (buttons, inputs)
    pub control_fill: Color32,
    pub control_hover: Color32,
    pub border: Color32,

    // Bookmark cards
    pub card_top: Color32,
    pub card_bottom: Color32,
    pub card_hover_border: Color32,

    pub link: Color32,
    pub error: Color32,
}

/// The built-in light and dark palettes
pub struct ThemeManager {
    light: ThemeColors,
    dark: ThemeColors,
}

impl ThemeManager {
    /// Creates a manager holding the Light and Dark palettes
    pub fn new() -> Self {
        Self {
            light: light_palette(),
            dark: dark_palette(),
        }
    }

    /// Returns the palette for a dark/light flag
    pub fn palette(&self, is_dark: bool) -> &ThemeColors {
        if is_dark {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Applies a palette to egui visuals
    pub fn apply_theme(&self, colors: &ThemeColors, visuals: &mut egui::Visuals) {
        // Panels stay translucent so the background image shows through
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.control_fill;
        visuals.faint_bg_color = colors.control_hover;

        visuals.override_text_color = Some(colors.text);

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.control_fill;
        visuals.widgets.inactive.weak_bg_fill = colors.control_fill;
        visuals.widgets.hovered.bg_fill = colors.control_hover;
        visuals.widgets.hovered.weak_bg_fill = colors.control_hover;
        visuals.widgets.active.bg_fill = colors.control_hover;

        visuals.selection.stroke.color = colors.card_hover_border;
        visuals.hyperlink_color = colors.link;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Light variant: white cards, dark text
fn light_palette() -> ThemeColors {
    ThemeColors {
        page_background: hex_to_color32("#e5e7eb"),
        // bg-white/30
        overlay: with_alpha(Color32::WHITE, 77),
        panel_background: Color32::WHITE,

        text: hex_to_color32("#1f2937"),
        text_dim: with_alpha(Color32::BLACK, 153),
        text_strong: hex_to_color32("#111827"),

        control_fill: with_alpha(Color32::BLACK, 26),
        control_hover: with_alpha(Color32::BLACK, 51),
        border: with_alpha(Color32::BLACK, 26),

        card_top: Color32::WHITE,
        card_bottom: hex_to_color32("#e5e7eb"),
        card_hover_border: hex_to_color32("#6366f1"),

        link: with_alpha(Color32::BLACK, 102),
        error: hex_to_color32("#c82828"),
    }
}

/// Dark variant: purple/blue cards, white text
fn dark_palette() -> ThemeColors {
    ThemeColors {
        page_background: hex_to_color32("#111827"),
        // bg-black/30
        overlay: with_alpha(Color32::BLACK, 77),
        panel_background: hex_to_color32("#1f2937"),

        text: Color32::WHITE,
        text_dim: with_alpha(Color32::WHITE, 153),
        text_strong: Color32::WHITE,

        control_fill: with_alpha(Color32::WHITE, 26),
        control_hover: with_alpha(Color32::WHITE, 51),
        border: with_alpha(Color32::WHITE, 51),

        card_top: hex_to_color32("#6b21a8"),
        card_bottom: hex_to_color32("#1e3a8a"),
        card_hover_border: hex_to_color32("#6366f1"),

        link: with_alpha(Color32::WHITE, 102),
        error: hex_to_color32("#e74c3c"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, color.a())
}

/// Returns the color with a new alpha channel
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ThemeState::default();
        assert_eq!(theme.name, "dark");
        assert!(theme.is_dark);
        assert!(!theme.is_custom_background);
        assert_eq!(theme.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let original = ThemeState::default();
        let once = original.toggle_dark_mode();
        assert!(!once.is_dark);
        assert_eq!(once.background, original.background);
        assert_eq!(once.name, original.name);
        assert_eq!(once.toggle_dark_mode(), original);
    }

    #[test]
    fn test_set_background_keeps_mode_and_name() {
        let light = ThemeState::default().toggle_dark_mode();
        let custom = light.set_background("https://example.com/bg.jpg", true);
        assert!(custom.is_custom_background);
        assert!(!custom.is_dark);
        assert_eq!(custom.name, "dark");
        assert_eq!(custom.background, "https://example.com/bg.jpg");

        // Custom flag follows the argument even when already set
        let again = custom.set_background("https://example.com/other.jpg", true);
        assert!(again.is_custom_background);
        let reset = again.set_background(DEFAULT_BACKGROUND, false);
        assert!(!reset.is_custom_background);
    }

    #[test]
    fn test_embedded_background_detection() {
        let theme = ThemeState::default();
        assert!(!theme.has_embedded_background());
        let embedded = theme.set_background("data:image/png;base64,AAAA", true);
        assert!(embedded.has_embedded_background());
    }

    #[test]
    fn test_palettes_registered() {
        let manager = ThemeManager::new();
        assert_eq!(manager.palette(true).text, Color32::WHITE);
        assert_ne!(manager.palette(false).text, Color32::WHITE);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(hex_to_color32("#6366f1"), Color32::from_rgb(0x63, 0x66, 0xf1));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
        assert_eq!(adjust_brightness(Color32::from_rgb(100, 100, 100), 2.0), Color32::from_rgb(200, 200, 200));
        assert_eq!(with_alpha(Color32::WHITE, 0).a(), 0);
    }
}

//! Color choices for cards and overlays.
//!
//! This module provides functions for:
//! - Getting the palette for the current dark/light flag
//! - Picking card colors for the hover state
//!
//! Every consumer that draws text or icons goes through here so contrast
//! follows the dark/light flag.

use egui::Color32;
use rstartpage::{adjust_brightness, ThemeColors, ThemeManager};

/// Colors used to paint one bookmark card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub top: Color32,
    pub bottom: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_dim: Color32,
}

/// Returns the palette for the dark/light flag.
pub fn theme_colors(theme_manager: &ThemeManager, is_dark: bool) -> &ThemeColors {
    theme_manager.palette(is_dark)
}

/// Returns card colors, brightened and outlined while hovered.
pub fn card_colors(colors: &ThemeColors, hovered: bool) -> CardColors {
    if hovered {
        CardColors {
            top: adjust_brightness(colors.card_top, 1.15),
            bottom: adjust_brightness(colors.card_bottom, 1.15),
            border: colors.card_hover_border,
            text: colors.text_strong,
            text_dim: colors.text_dim,
        }
    } else {
        CardColors {
            top: colors.card_top,
            bottom: colors.card_bottom,
            border: Color32::TRANSPARENT,
            text: colors.text_strong,
            text_dim: colors.text_dim,
        }
    }
}

/// Fill behind the icon badge in the card corner.
pub fn icon_badge_color() -> Color32 {
    Color32::from_rgba_unmultiplied(31, 41, 55, 128)
}

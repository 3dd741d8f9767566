//! Applies the session theme to egui.

use crate::app::AppState;
use crate::presentation::color_mapping;

/// Keeps egui visuals in sync with the session's dark/light flag.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current palette to the egui context.
    ///
    /// Called every frame; the theme may have changed during the last one.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let is_dark = state.session.theme().is_dark;
        let mut visuals = if is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        let colors = color_mapping::theme_colors(&state.themes, is_dark);
        state.themes.apply_theme(colors, &mut visuals);
        ctx.set_visuals(visuals);
    }
}

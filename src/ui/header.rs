//! Header panel UI rendering
//!
//! Top row of the page: "Add Website" on the left, background picker and
//! dark/light toggle on the right, and the last error message underneath.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Add Website"
    AddBookmarkRequested,
    /// User clicked the background picker button
    BackgroundPickerToggled,
    /// User clicked the sun/moon button
    DarkModeToggled,
}

/// Renders the header controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let colors = state.palette();
    let is_dark = state.session.theme().is_dark;

    ui.horizontal(|ui| {
        let add = egui::Button::new(RichText::new("➕ Add Website").color(colors.text).size(16.0))
            .fill(colors.control_fill)
            .corner_radius(8.0);
        if ui.add(add).clicked() {
            interaction = Some(HeaderInteraction::AddBookmarkRequested);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_icon = if is_dark { "☀" } else { "🌙" };
            let toggle = egui::Button::new(RichText::new(toggle_icon).color(colors.text).size(18.0))
                .fill(colors.control_fill)
                .corner_radius(8.0);
            if ui.add(toggle).on_hover_text("Toggle theme").clicked() {
                interaction = Some(HeaderInteraction::DarkModeToggled);
            }

            let picker = egui::Button::new(RichText::new("🖼").color(colors.text).size(18.0))
                .fill(colors.control_fill)
                .corner_radius(8.0)
                .selected(state.overlays.background_picker_open());
            if ui.add(picker).on_hover_text("Change background").clicked() {
                interaction = Some(HeaderInteraction::BackgroundPickerToggled);
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(colors.error, err);
    }

    interaction
}

//! Search box UI rendering
//!
//! A single text field bound to the live query. The grid re-filters from it
//! on every frame, so there is nothing to report back.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

const SEARCH_MAX_WIDTH: f32 = 576.0;

/// Renders the centered search box.
pub fn render_search_bar(ui: &mut egui::Ui, state: &mut AppState) {
    let colors = state.palette().clone();
    let width = ui.available_width().min(SEARCH_MAX_WIDTH);

    ui.vertical_centered(|ui| {
        egui::Frame::default()
            .fill(colors.control_fill)
            .stroke(egui::Stroke::new(1.0, colors.border))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🔍").color(colors.text_dim));
                    let field = egui::TextEdit::singleline(state.search.query_mut())
                        .hint_text("Search websites...")
                        .frame(false)
                        .text_color(colors.text)
                        .desired_width(f32::INFINITY);
                    let response = ui.add(field);
                    if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        state.search.clear();
                    }
                });
            });
    });
}

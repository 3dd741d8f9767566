//! Footer UI rendering

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::BackgroundLoader;
use crate::utils::{describe_background, format_bookmark_count};

const CREDIT_URL: &str = "https://neuralcodelab.com";

/// Renders the status line and the attribution link at the bottom of the page.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Background reader, for the in-progress indicator
pub fn render_footer(ui: &mut egui::Ui, state: &AppState, loader: &BackgroundLoader) {
    let colors = state.palette();
    let theme = state.session.theme();

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let shown = state.session.search(state.search.query()).len();
            let total = state.session.bookmarks.len();
            ui.label(RichText::new(format_bookmark_count(shown, total)).color(colors.text_dim));
            ui.label(RichText::new("|").color(colors.text_dim));
            ui.label(
                RichText::new(describe_background(&theme.background, theme.is_custom_background))
                    .color(colors.text_dim),
            );
            if loader.is_loading() {
                let file = loader
                    .pending_path()
                    .and_then(|p| p.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.spinner();
                ui.label(RichText::new(format!("Loading background {}…", file)).color(colors.text_dim));
            }
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new("Created by").small().color(colors.link));
            ui.hyperlink_to(RichText::new("neuralcodelab.com").small().strong(), CREDIT_URL);
        });
    });
}

//! Background picker popup UI rendering
//!
//! Opened from the header. Offers a URL field and a file chooser; the file
//! itself is read later by the background loader.

use eframe::egui;
use egui::RichText;
use std::path::PathBuf;
use crate::app::AppState;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico"];

/// Result of user interaction with the background picker
pub enum PickerInteraction {
    /// User submitted the URL field
    UrlSubmitted,
    /// User chose an image file
    FileChosen(PathBuf),
    /// User closed the popup
    Closed,
}

/// Renders the background picker popup if it is open.
///
/// # Arguments
/// * `ctx` - egui context
/// * `state` - Mutable reference to application state (URL buffer)
/// * `loading` - Whether a file read is running
pub fn render_background_picker(
    ctx: &egui::Context,
    state: &mut AppState,
    loading: bool,
) -> Option<PickerInteraction> {
    if !state.overlays.background_picker_open() {
        return None;
    }

    let colors = state.palette().clone();
    let mut interaction = None;
    let mut open = true;

    egui::Window::new("Background")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
        .frame(
            egui::Frame::popup(&ctx.style())
                .fill(colors.panel_background)
                .corner_radius(8.0)
                .inner_margin(16.0),
        )
        .show(ctx, |ui| {
            ui.set_width(300.0);

            ui.label(RichText::new("Background Image URL").small().color(colors.text_dim));
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.picker.url)
                        .hint_text("https://example.com/image.jpg")
                        .desired_width(ui.available_width() - 40.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("🔗").on_hover_text("Use this URL").clicked() || enter {
                    interaction = Some(PickerInteraction::UrlSubmitted);
                }
            });

            ui.add_space(12.0);
            ui.label(RichText::new("Upload Image").small().color(colors.text_dim));

            let choose = egui::Button::new("📤 Choose file")
                .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add_enabled(!loading, choose).clicked() {
                if let Some(path) = pick_image_file() {
                    interaction = Some(PickerInteraction::FileChosen(path));
                }
            }

            if loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Reading image…").color(colors.text_dim));
                });
            }
        });

    if !open && interaction.is_none() {
        interaction = Some(PickerInteraction::Closed);
    }
    interaction
}

/// Opens the native file dialog filtered to images.
fn pick_image_file() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Choose background image")
        .add_filter("Images", IMAGE_EXTENSIONS);

    if let Some(dir) = dirs::picture_dir().or_else(dirs::home_dir) {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

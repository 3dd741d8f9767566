//! Add-bookmark modal UI rendering
//!
//! "Add New Website" dialog with Name, URL and Icon fields. The submit
//! button stays disabled until name and URL are filled in; the form itself
//! re-checks on submit.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Result of user interaction with the modal
pub enum ModalInteraction {
    /// User pressed "Add Website" or Enter
    Submitted,
    /// User closed the modal without adding
    Cancelled,
}

/// Renders the add-bookmark modal if it is open.
///
/// # Arguments
/// * `ctx` - egui context (the modal is its own layer)
/// * `state` - Mutable reference to application state (form buffers)
///
/// # Returns
/// * `Option<ModalInteraction>` - User interaction result
pub fn render_add_bookmark_modal(ctx: &egui::Context, state: &mut AppState) -> Option<ModalInteraction> {
    if !state.overlays.add_bookmark_open() {
        return None;
    }

    let colors = state.palette().clone();
    let mut interaction = None;

    // Frame fill comes from the palette's window color
    let modal = egui::Modal::new(egui::Id::new("add_bookmark_modal"))
        .show(ctx, |ui| {
            ui.set_width(380.0);

            ui.horizontal(|ui| {
                ui.heading(RichText::new("Add New Website").color(colors.text_strong));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("✕").color(colors.text_dim)).clicked() {
                        interaction = Some(ModalInteraction::Cancelled);
                    }
                });
            });
            ui.add_space(12.0);

            let mut enter_pressed = false;
            let mut field = |ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String| {
                ui.label(RichText::new(label).small().color(colors.text_dim));
                let response = ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .desired_width(f32::INFINITY),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    enter_pressed = true;
                }
                ui.add_space(8.0);
            };

            field(ui, "Name", "GitHub", &mut state.form.name);
            field(ui, "URL", "https://github.com", &mut state.form.url);
            field(ui, "Icon (emoji)", "🌐", &mut state.form.icon);

            let can_submit = state.form.can_submit();
            let submit = egui::Button::new(RichText::new("Add Website").strong())
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let clicked = ui
                .add_enabled(can_submit, submit)
                .on_disabled_hover_text("Name and URL are required")
                .clicked();

            if clicked || (enter_pressed && can_submit) {
                interaction = Some(ModalInteraction::Submitted);
            }
        });

    if interaction.is_none() && modal.should_close() {
        interaction = Some(ModalInteraction::Cancelled);
    }

    interaction
}

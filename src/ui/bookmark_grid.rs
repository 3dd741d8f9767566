//! Bookmark grid UI rendering
//!
//! Lays out one card per bookmark returned by the search, in insertion
//! order, wrapping to as many columns as fit.

use eframe::egui;
use egui::{RichText, Sense, Vec2};
use rstartpage::{BookmarkEntry, BookmarkId, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::card_renderer::{paint_card, paint_icon_badge, ICON_BADGE_RADIUS};
use crate::rendering::text_utils::{display_url, truncate_text_to_fit};

pub const CARD_SIZE: Vec2 = Vec2::new(288.0, 200.0);
const CARD_SPACING: f32 = 24.0;
const CARD_PADDING: f32 = 18.0;

/// Result of user interaction with a card
pub enum GridInteraction {
    /// Card body was clicked
    Open(String),
    /// Remove button was clicked
    Remove(BookmarkId),
}

/// Renders the filtered bookmark grid
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<GridInteraction>` - User interaction result
pub fn render_bookmark_grid(ui: &mut egui::Ui, state: &AppState) -> Option<GridInteraction> {
    let mut interaction = None;
    let colors = state.palette();
    let visible = state.session.search(state.search.query());

    if visible.is_empty() {
        ui.vertical_centered(|ui| {
            let text = if state.search.is_filtering() {
                "No websites match your search"
            } else {
                "No websites yet. Use \"Add Website\" to create one."
            };
            ui.label(RichText::new(text).color(colors.text_dim));
        });
        return None;
    }

    ui.spacing_mut().item_spacing = Vec2::splat(CARD_SPACING);
    ui.horizontal_wrapped(|ui| {
        for entry in visible {
            if let Some(card_interaction) = render_card(ui, entry, colors) {
                interaction = Some(card_interaction);
            }
        }
    });

    interaction
}

fn render_card(ui: &mut egui::Ui, entry: &BookmarkEntry, colors: &ThemeColors) -> Option<GridInteraction> {
    let mut interaction = None;

    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    let response = response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(&entry.url);
    let card_colors = color_mapping::card_colors(colors, response.hovered());

    paint_card(ui.painter(), rect, &card_colors);
    let badge_center = rect.left_top() + Vec2::splat(CARD_PADDING + ICON_BADGE_RADIUS);
    paint_icon_badge(ui.painter(), badge_center, &entry.icon);

    // Name and URL anchored to the bottom of the card
    let text_width = rect.width() - 2.0 * CARD_PADDING;
    let url_font = egui::FontId::proportional(13.0);
    let url_text = truncate_text_to_fit(display_url(&entry.url), text_width, &url_font, ui.painter());
    let name_font = egui::FontId::proportional(20.0);
    let name_text = truncate_text_to_fit(&entry.name, text_width, &name_font, ui.painter());
    let bottom_left = rect.left_bottom() + Vec2::new(CARD_PADDING, -CARD_PADDING);
    ui.painter().text(
        bottom_left,
        egui::Align2::LEFT_BOTTOM,
        url_text,
        url_font,
        card_colors.text_dim,
    );
    ui.painter().text(
        bottom_left - Vec2::new(0.0, 20.0),
        egui::Align2::LEFT_BOTTOM,
        name_text,
        name_font,
        card_colors.text,
    );

    // Remove button in the top-right corner; added after the card so it
    // takes clicks before the card body does
    let button_rect = egui::Rect::from_min_size(
        rect.right_top() + Vec2::new(-CARD_PADDING - 28.0, CARD_PADDING),
        Vec2::splat(28.0),
    );
    let remove = egui::Button::new(RichText::new("✕").color(egui::Color32::WHITE))
        .fill(egui::Color32::from_black_alpha(80))
        .corner_radius(14.0);
    if ui.put(button_rect, remove).on_hover_text("Remove").clicked() {
        interaction = Some(GridInteraction::Remove(entry.id));
    } else if response.clicked() {
        interaction = Some(GridInteraction::Open(entry.url.clone()));
    }

    interaction
}

//! Bookmark card painting
//!
//! Draws the card body (vertical gradient, rounded outline) and the icon
//! badge. Widgets inside the card are laid out by the grid.

use eframe::egui;
use egui::{Color32, Mesh, Pos2, Rect, Shape, Stroke, StrokeKind};
use crate::presentation::color_mapping::{icon_badge_color, CardColors};

pub const CARD_CORNER_RADIUS: f32 = 16.0;
pub const ICON_BADGE_RADIUS: f32 = 24.0;

/// Paints the card background into `rect`.
pub fn paint_card(painter: &egui::Painter, rect: Rect, colors: &CardColors) {
    painter.add(Shape::mesh(vertical_gradient(rect, colors.top, colors.bottom)));
    if colors.border != Color32::TRANSPARENT {
        painter.rect_stroke(
            rect,
            CARD_CORNER_RADIUS,
            Stroke::new(1.5, colors.border),
            StrokeKind::Inside,
        );
    }
}

/// Paints the round badge behind a bookmark icon and the icon itself.
pub fn paint_icon_badge(painter: &egui::Painter, center: Pos2, icon: &str) {
    painter.circle_filled(center, ICON_BADGE_RADIUS, icon_badge_color());
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(26.0),
        Color32::WHITE,
    );
}

/// Builds a two-color top-to-bottom gradient mesh covering `rect`.
pub fn vertical_gradient(rect: Rect, top: Color32, bottom: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    mesh
}

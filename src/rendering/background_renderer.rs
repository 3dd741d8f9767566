//! Page background painting
//!
//! Paints the theme background behind every panel: the palette color first,
//! then the background image scaled to cover the window, and the translucent
//! dark/light overlay on top. Embedded data URIs are decoded here; http(s)
//! URLs go through the image loaders installed at startup. While a remote
//! image is loading, or if it fails, only the palette color shows.

use eframe::egui;
use egui::load::{SizeHint, SizedTexture, TexturePoll};
use egui::{Color32, ColorImage, Pos2, Rect, TextureHandle, TextureOptions, Vec2};
use rstartpage::{data_uri, ThemeColors, ThemeState};
use tracing::{debug, warn};

/// Decoded texture for the current embedded background.
///
/// Decoding happens once per background source, not once per frame.
#[derive(Default)]
pub struct BackgroundRenderer {
    /// Source string the texture was decoded from, and the texture
    texture: Option<(String, TextureHandle)>,
    /// Source that failed to decode; not retried
    failed_source: Option<String>,
}

impl BackgroundRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints the background layer for the current theme.
    pub fn paint(&mut self, ctx: &egui::Context, theme: &ThemeState, colors: &ThemeColors) {
        let screen = ctx.content_rect();
        let painter = ctx.layer_painter(egui::LayerId::background());

        painter.rect_filled(screen, 0.0, colors.page_background);

        let texture = if theme.has_embedded_background() {
            self.texture_for(ctx, &theme.background)
                .map(SizedTexture::from_handle)
        } else {
            self.remote_texture(ctx, &theme.background)
        };
        if let Some(texture) = texture {
            let uv = cover_uv(texture.size, screen.size());
            painter.image(texture.id, screen, uv, Color32::WHITE);
        }

        painter.rect_filled(screen, 0.0, colors.overlay);
    }

    /// Texture for a URL background, once the loaders have it ready.
    fn remote_texture(&mut self, ctx: &egui::Context, source: &str) -> Option<SizedTexture> {
        if self.failed_source.as_deref() == Some(source) {
            return None;
        }
        match ctx.try_load_texture(source, TextureOptions::LINEAR, SizeHint::default()) {
            Ok(TexturePoll::Ready { texture }) => Some(texture),
            Ok(TexturePoll::Pending { .. }) => None,
            Err(err) => {
                warn!(url = source, error = %err, "background image could not be loaded");
                self.failed_source = Some(source.to_string());
                None
            }
        }
    }

    fn texture_for(&mut self, ctx: &egui::Context, source: &str) -> Option<&TextureHandle> {
        let cached = matches!(&self.texture, Some((s, _)) if s == source);
        if !cached {
            if self.failed_source.as_deref() == Some(source) {
                return None;
            }
            match decode_image(source) {
                Ok(image) => {
                    let handle = ctx.load_texture("page_background", image, TextureOptions::LINEAR);
                    debug!(size = ?handle.size(), "background texture uploaded");
                    self.texture = Some((source.to_string(), handle));
                    self.failed_source = None;
                }
                Err(err) => {
                    warn!(error = %err, "background image could not be decoded");
                    self.texture = None;
                    self.failed_source = Some(source.to_string());
                    return None;
                }
            }
        }
        self.texture.as_ref().map(|(_, handle)| handle)
    }
}

/// Decodes a data-URI image into egui pixels.
pub fn decode_image(source: &str) -> anyhow::Result<ColorImage> {
    let (_mime, bytes) = data_uri::decode(source)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// UV rectangle that scales an image to cover `target`, cropping the excess
/// evenly on both sides (CSS `background-size: cover` with centered position).
pub fn cover_uv(image: Vec2, target: Vec2) -> Rect {
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        // Image is wider: crop left and right
        let visible = target_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(Pos2::new(margin, 0.0), Pos2::new(1.0 - margin, 1.0))
    } else {
        // Image is taller: crop top and bottom
        let visible = image_aspect / target_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(Pos2::new(0.0, margin), Pos2::new(1.0, 1.0 - margin))
    }
}

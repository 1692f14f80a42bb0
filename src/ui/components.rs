//! Reusable UI components
//!
//! Standalone widgets used by the slideshow views.

use super::grayscale::grayscale_uri;
use crate::theme;
use crate::types::Glyph;
use crate::view_model::Thumbnail;
use eframe::egui;

/// Paint `glyph` centered on `rect`
pub fn glyph_overlay(ui: &egui::Ui, rect: egui::Rect, glyph: Glyph, size: f32) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph.icon(),
        egui::FontId::proportional(size),
        theme::OVERLAY_GLYPH,
    );
}

/// Thumbnail tile. Current item in full color with a play glyph, others grayed out.
pub fn thumbnail(ui: &mut egui::Ui, thumb: &Thumbnail<'_>) -> egui::Response {
    let (w, h) = theme::THUMB_SIZE;
    let source = if thumb.highlighted {
        thumb.url.to_owned()
    } else {
        grayscale_uri(thumb.url)
    };
    let image = egui::Image::new(source)
        .fit_to_exact_size(egui::vec2(w, h))
        .corner_radius(theme::RADIUS_THUMB)
        .sense(egui::Sense::click());

    let response = ui.add(image);
    if let Some(glyph) = thumb.overlay {
        glyph_overlay(ui, response.rect, glyph, theme::GLYPH_SIZE_SMALL);
    }
    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(thumb.details)
}

/// Frameless icon button
pub fn icon_button(ui: &mut egui::Ui, icon: &str, size: f32, tooltip: &str) -> egui::Response {
    ui.add(egui::Button::new(egui::RichText::new(icon).size(size)).frame(false))
        .on_hover_text(tooltip)
}

//! Centralized theme constants for Catalog Viewer
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_STRIP: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
/// Glyphs drawn on top of images
pub const OVERLAY_GLYPH: Color32 = Color32::WHITE;

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const FONT_CAPTION_LARGE: f32 = 20.0;

// =============================================================================
// SIZES
// =============================================================================
pub const STRIP_HEIGHT: f32 = 120.0;
pub const THUMB_SIZE: (f32, f32) = (120.0, 80.0);
pub const GLYPH_SIZE: f32 = 60.0;
pub const GLYPH_SIZE_SMALL: f32 = 40.0;
pub const CAPTION_PANEL_FRACTION: f32 = 1.0 / 3.0;

// =============================================================================
// RADII / STROKES / SPACING
// =============================================================================
pub const RADIUS_STRIP: f32 = 8.0;
pub const RADIUS_THUMB: f32 = 16.0;
pub const RADIUS_MAIN_IMAGE: f32 = 48.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

/// Dark visuals with frameless controls that turn teal on hover
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_STRIP;
    visuals.hyperlink_color = ACCENT;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    let controls = &mut visuals.widgets;
    controls.inactive.weak_bg_fill = Color32::TRANSPARENT;
    controls.inactive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    controls.hovered.weak_bg_fill = Color32::TRANSPARENT;
    controls.hovered.fg_stroke = egui::Stroke::new(1.5, ACCENT);
    controls.active.weak_bg_fill = Color32::TRANSPARENT;
    controls.active.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_LG, SPACING_MD);
        style.spacing.button_padding = egui::vec2(SPACING_MD, SPACING_MD);
    });
}

// =============================================================================
// HELPER - Panel frames
// =============================================================================
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn strip_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_STRIP)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_STRIP)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

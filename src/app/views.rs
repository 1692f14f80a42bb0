//! View rendering (main image, caption, thumbnail strip, controls)
//!
//! Everything here reads a `ViewModel` and reports at most one `Action`;
//! state is only changed by the caller.

use crate::theme;
use crate::types::{Action, Glyph};
use crate::ui::components::{glyph_overlay, icon_button, thumbnail};
use crate::view_model::{MainPanel, ViewModel};
use eframe::egui;

/// Shortcuts first, then the rendered controls; a click wins over a key
pub fn frame_action(ctx: &egui::Context, view: &ViewModel<'_>) -> Option<Action> {
    let shortcut = read_shortcuts(ctx);
    render(ctx, view).or(shortcut)
}

pub fn render(ctx: &egui::Context, view: &ViewModel<'_>) -> Option<Action> {
    let mut action = None;

    egui::TopBottomPanel::bottom("thumbnail_strip")
        .exact_height(theme::STRIP_HEIGHT + 2.0 * theme::SPACING_LG)
        .frame(theme::strip_frame())
        .show(ctx, |ui| {
            action = render_strip(ui, view);
        });

    egui::CentralPanel::default()
        .frame(theme::main_frame())
        .show(ctx, |ui| render_main_panel(ui, &view.main));

    action
}

pub fn render_empty_state(ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(theme::main_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  No images in catalog",
                        egui_phosphor::regular::IMAGE
                    ))
                    .size(theme::FONT_CAPTION_LARGE)
                    .color(theme::TEXT_DIM),
                );
            });
        });
}

/// Arrow keys navigate, space toggles autoplay
pub fn read_shortcuts(ctx: &egui::Context) -> Option<Action> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowLeft) {
            Some(Action::Previous)
        } else if i.key_pressed(egui::Key::ArrowRight) {
            Some(Action::Next)
        } else if i.key_pressed(egui::Key::Space) {
            Some(Action::TogglePlayPause)
        } else {
            None
        }
    })
}

fn render_main_panel(ui: &mut egui::Ui, main: &MainPanel<'_>) {
    let available = ui.available_size();
    let caption_w = available.x * theme::CAPTION_PANEL_FRACTION;
    let image_w = (available.x - caption_w - theme::SPACING_XL).max(0.0);

    ui.horizontal_top(|ui| {
        ui.allocate_ui(egui::vec2(image_w, available.y), |ui| {
            let image = egui::Image::new(main.url)
                .max_width(image_w)
                .max_height(available.y)
                .maintain_aspect_ratio(true)
                .corner_radius(theme::RADIUS_MAIN_IMAGE);
            let response = ui.add(image);
            if let Some(glyph) = main.overlay {
                glyph_overlay(ui, response.rect, glyph, theme::GLYPH_SIZE);
            }
        });

        ui.add_space(theme::SPACING_XL);

        ui.allocate_ui(egui::vec2(caption_w, available.y), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(main.caption)
                        .size(theme::FONT_CAPTION_LARGE)
                        .color(theme::TEXT_PRIMARY),
                )
                .wrap(),
            );
        });
    });
}

fn render_strip(ui: &mut egui::Ui, view: &ViewModel<'_>) -> Option<Action> {
    let mut action = None;

    ui.horizontal_centered(|ui| {
        if icon_button(ui, egui_phosphor::regular::CARET_LEFT, theme::GLYPH_SIZE_SMALL, "Previous")
            .clicked()
        {
            action = Some(Action::Previous);
        }

        let controls_w = 2.0 * (theme::GLYPH_SIZE_SMALL + theme::SPACING_XL);
        egui::ScrollArea::horizontal()
            .max_width((ui.available_width() - controls_w).max(0.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for thumb in &view.thumbnails {
                        if thumbnail(ui, thumb).clicked() {
                            action = Some(Action::SelectThumbnail(thumb.index));
                        }
                    }
                });
            });

        if icon_button(ui, egui_phosphor::regular::CARET_RIGHT, theme::GLYPH_SIZE_SMALL, "Next")
            .clicked()
        {
            action = Some(Action::Next);
        }

        let tooltip = match view.play_pause {
            Glyph::Pause => "Pause",
            Glyph::Play => "Play",
        };
        if icon_button(ui, view.play_pause.icon(), theme::GLYPH_SIZE_SMALL, tooltip).clicked() {
            action = Some(Action::TogglePlayPause);
        }
    });

    action
}

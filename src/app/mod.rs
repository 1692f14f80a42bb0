//! App module - contains the main application state and logic

mod autoplay;
mod viewer;
mod views;

use crate::catalog::Catalog;
use crate::settings::Settings;
use crate::theme;
use crate::ui::grayscale::GrayscaleLoader;
use crate::view_model::ViewModel;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use viewer::Viewer;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) viewer: Viewer,
    // Hosts the autoplay task
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        catalog: Option<Catalog>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // http(s):// and file:// image URIs
        egui_extras::install_image_loaders(&cc.egui_ctx);
        // grayscale://<uri> for inactive thumbnails
        cc.egui_ctx
            .add_image_loader(std::sync::Arc::new(GrayscaleLoader::default()));

        theme::apply_visuals(&cc.egui_ctx);

        let viewer = Viewer::new(catalog, settings.autoplay_interval()).with_repaint(cc.egui_ctx.clone());

        Self {
            viewer,
            runtime,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    /// One frame: apply pending ticks, draw, then apply whatever the user did
    pub(crate) fn frame(&mut self, ctx: &egui::Context) {
        self.viewer.poll_autoplay();

        let action = match self.viewer.slideshow() {
            Some(show) => views::frame_action(ctx, &ViewModel::build(show)),
            None => {
                views::render_empty_state(ctx);
                None
            }
        };

        if let Some(action) = action {
            self.viewer.apply(action, self.runtime.handle());
        }
    }

    pub(crate) fn shutdown(&mut self) {
        if self.viewer.autoplay_running() {
            info!("Stopping autoplay");
        }
        self.viewer.shutdown();
    }
}

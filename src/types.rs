//! Common types and data structures

/// User intent reported by the renderer and applied by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectThumbnail(usize),
    Previous,
    Next,
    TogglePlayPause,
}

/// Icon drawn on top of an image or inside a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Play,
    Pause,
}

impl Glyph {
    pub fn icon(self) -> &'static str {
        match self {
            Glyph::Play => egui_phosphor::regular::PLAY,
            Glyph::Pause => egui_phosphor::regular::PAUSE,
        }
    }
}

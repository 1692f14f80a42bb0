//! Pure mapping from slideshow state to what gets drawn

use crate::slideshow::{Slideshow, ViewState};
use crate::types::Glyph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainPanel<'a> {
    pub url: &'a str,
    pub caption: &'a str,
    pub overlay: Option<Glyph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub url: &'a str,
    pub details: &'a str,
    /// Full color when true, grayscale otherwise
    pub highlighted: bool,
    pub overlay: Option<Glyph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    pub main: MainPanel<'a>,
    pub thumbnails: Vec<Thumbnail<'a>>,
    pub play_pause: Glyph,
}

impl<'a> ViewModel<'a> {
    pub fn build(show: &'a Slideshow) -> Self {
        let catalog = show.catalog();
        let ViewState {
            current_index: current,
            is_playing: playing,
        } = show.state();
        let item = &catalog[current];

        let thumbnails = catalog
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let highlighted = index == current;
                Thumbnail {
                    index,
                    url: &item.url,
                    details: &item.details,
                    highlighted,
                    overlay: highlighted.then_some(Glyph::Play),
                }
            })
            .collect();

        Self {
            main: MainPanel {
                url: &item.url,
                caption: &item.details,
                overlay: playing.then_some(Glyph::Pause),
            },
            thumbnails,
            play_pause: if playing { Glyph::Pause } else { Glyph::Play },
        }
    }
}

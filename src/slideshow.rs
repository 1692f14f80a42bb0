//! Slideshow state and the handlers that mutate it

use crate::catalog::Catalog;
use tracing::{debug, warn};

/// Current position and play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub current_index: usize,
    pub is_playing: bool,
}

/// Catalog plus view state. `current_index` always points into the catalog.
#[derive(Debug, Clone)]
pub struct Slideshow {
    catalog: Catalog,
    state: ViewState,
}

impl Slideshow {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Jump to `index` and stop autoplay. Out-of-range indices are ignored.
    pub fn select_thumbnail(&mut self, index: usize) {
        if index >= self.catalog.len() {
            warn!(index, len = self.catalog.len(), "Ignoring out-of-range thumbnail selection");
            return;
        }
        self.state.current_index = index;
        self.state.is_playing = false;
        debug!(index, "Thumbnail selected");
    }

    pub fn go_to_previous(&mut self) {
        self.state.current_index = if self.state.current_index == 0 {
            self.catalog.len() - 1
        } else {
            self.state.current_index - 1
        };
        self.state.is_playing = false;
    }

    pub fn go_to_next(&mut self) {
        self.advance();
        self.state.is_playing = false;
    }

    pub fn toggle_play_pause(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        debug!(playing = self.state.is_playing, "Play state toggled");
    }

    /// Autoplay step: advance without touching the play state
    pub fn tick(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.state.current_index = (self.state.current_index + 1) % self.catalog.len();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Item;

    pub(crate) fn catalog_of(n: usize) -> Catalog {
        let items = (0..n)
            .map(|i| Item {
                url: format!("https://example.com/{i}.jpg"),
                details: format!("Item {i}"),
            })
            .collect();
        Catalog::new(items).expect("non-empty")
    }

    fn at(n: usize, index: usize, playing: bool) -> Slideshow {
        let mut show = Slideshow::new(catalog_of(n));
        show.select_thumbnail(index);
        if playing {
            show.toggle_play_pause();
        }
        show
    }

    #[test]
    fn starts_at_first_item_stopped() {
        let show = Slideshow::new(catalog_of(3));
        assert_eq!(show.state(), ViewState { current_index: 0, is_playing: false });
    }

    #[test]
    fn next_and_previous_wrap_for_every_index() {
        for n in 1..=6 {
            for i in 0..n {
                let mut show = at(n, i, false);
                show.go_to_next();
                assert_eq!(show.current_index(), (i + 1) % n);

                let mut show = at(n, i, false);
                show.go_to_previous();
                assert_eq!(show.current_index(), (i + n - 1) % n);
            }
        }
    }

    #[test]
    fn next_n_times_cycles_back() {
        for n in 1..=5 {
            let mut show = at(n, n / 2, false);
            let start = show.current_index();
            for _ in 0..n {
                show.go_to_next();
            }
            assert_eq!(show.current_index(), start);
        }
    }

    #[test]
    fn navigation_always_stops_playback() {
        let mut show = at(4, 2, true);
        show.go_to_next();
        assert!(!show.is_playing());

        let mut show = at(4, 2, true);
        show.go_to_previous();
        assert!(!show.is_playing());

        let mut show = at(4, 2, true);
        show.select_thumbnail(0);
        assert!(!show.is_playing());
    }

    #[test]
    fn toggle_twice_restores_play_state() {
        let mut show = at(3, 1, false);
        show.toggle_play_pause();
        assert!(show.is_playing());
        show.toggle_play_pause();
        assert!(!show.is_playing());
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn tick_advances_and_keeps_playing() {
        let mut show = at(3, 2, true);
        show.tick();
        assert_eq!(show.state(), ViewState { current_index: 0, is_playing: true });
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut show = at(3, 1, true);
        show.select_thumbnail(3);
        assert_eq!(show.state(), ViewState { current_index: 1, is_playing: true });
    }

    #[test]
    fn three_item_walkthrough() {
        let mut show = Slideshow::new(catalog_of(3));
        let state = |i, p| ViewState { current_index: i, is_playing: p };

        show.go_to_next();
        assert_eq!(show.state(), state(1, false));
        show.go_to_next();
        assert_eq!(show.state(), state(2, false));
        show.go_to_next();
        assert_eq!(show.state(), state(0, false));
        show.select_thumbnail(1);
        assert_eq!(show.state(), state(1, false));
        show.toggle_play_pause();
        assert_eq!(show.state(), state(1, true));
        show.tick();
        assert_eq!(show.state(), state(2, true));
    }
}

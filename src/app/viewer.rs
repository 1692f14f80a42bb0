//! Slideshow viewer: state store wired to the autoplay timer

use super::autoplay::AutoplayTimer;
use crate::catalog::Catalog;
use crate::slideshow::Slideshow;
use crate::types::Action;
use eframe::egui;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::trace;

pub struct Viewer {
    /// `None` when no catalog could be loaded; every input is ignored then
    slideshow: Option<Slideshow>,
    timer: AutoplayTimer,
    repaint: Option<egui::Context>,
}

impl Viewer {
    pub fn new(catalog: Option<Catalog>, period: Duration) -> Self {
        Self {
            slideshow: catalog.map(Slideshow::new),
            timer: AutoplayTimer::new(period),
            repaint: None,
        }
    }

    /// Ticks request a repaint of `ctx` so they show up without user input
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn slideshow(&self) -> Option<&Slideshow> {
        self.slideshow.as_ref()
    }

    pub fn autoplay_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Apply ticks delivered by the timer since the last frame
    pub fn poll_autoplay(&mut self) {
        let ticks = self.timer.take_ticks();
        let Some(show) = self.slideshow.as_mut() else {
            return;
        };
        for _ in 0..ticks {
            show.tick();
        }
        if ticks > 0 {
            trace!(ticks, index = show.current_index(), "Autoplay advanced");
        }
    }

    /// Apply a user action; starts or stops autoplay on `runtime` to match
    pub fn apply(&mut self, action: Action, runtime: &Handle) {
        let Some(show) = self.slideshow.as_mut() else {
            return;
        };
        match action {
            Action::SelectThumbnail(index) => show.select_thumbnail(index),
            Action::Previous => show.go_to_previous(),
            Action::Next => show.go_to_next(),
            Action::TogglePlayPause => show.toggle_play_pause(),
        }
        self.sync_autoplay(runtime);
    }

    /// Teardown: release the timer
    pub fn shutdown(&mut self) {
        self.timer.stop();
    }

    fn sync_autoplay(&mut self, runtime: &Handle) {
        let playing = self.slideshow.as_ref().is_some_and(Slideshow::is_playing);
        match (playing, self.timer.is_running()) {
            (true, false) => {
                let repaint = self.repaint.clone();
                self.timer.start(runtime, move || {
                    if let Some(ctx) = &repaint {
                        ctx.request_repaint();
                    }
                });
            }
            (false, true) => self.timer.stop(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::tests::catalog_of;
    use crate::slideshow::ViewState;
    use tokio::time::advance;

    const PERIOD: Duration = Duration::from_millis(3000);

    async fn elapse(ms: u64) {
        advance(Duration::from_millis(ms)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn viewer(n: usize) -> Viewer {
        Viewer::new(Some(catalog_of(n)), PERIOD)
    }

    fn state(v: &Viewer) -> ViewState {
        v.slideshow().expect("catalog loaded").state()
    }

    #[tokio::test(start_paused = true)]
    async fn playing_advances_every_period_and_wraps() {
        let mut v = viewer(3);
        v.apply(Action::TogglePlayPause, &Handle::current());
        assert!(v.autoplay_running());
        elapse(0).await;

        for expected in [1, 2, 0, 1] {
            elapse(3000).await;
            v.poll_autoplay();
            assert_eq!(state(&v), ViewState { current_index: expected, is_playing: true });
        }
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_stops_autoplay() {
        let mut v = viewer(3);
        v.apply(Action::TogglePlayPause, &Handle::current());
        elapse(0).await;
        v.apply(Action::Next, &Handle::current());
        assert!(!v.autoplay_running());

        elapse(6000).await;
        v.poll_autoplay();
        assert_eq!(state(&v), ViewState { current_index: 1, is_playing: false });
    }

    #[tokio::test(start_paused = true)]
    async fn pause_drops_pending_tick() {
        let mut v = viewer(3);
        v.apply(Action::TogglePlayPause, &Handle::current());
        elapse(0).await;
        elapse(3000).await;
        // tick delivered but not yet applied
        v.apply(Action::TogglePlayPause, &Handle::current());
        v.poll_autoplay();
        assert_eq!(state(&v), ViewState { current_index: 0, is_playing: false });
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_releases_timer() {
        let mut v = viewer(2);
        v.apply(Action::TogglePlayPause, &Handle::current());
        elapse(0).await;
        v.shutdown();
        assert!(!v.autoplay_running());

        elapse(3000).await;
        v.poll_autoplay();
        assert_eq!(state(&v).current_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn walkthrough_with_one_tick() {
        let mut v = viewer(3);
        for action in [Action::Next, Action::Next, Action::Next, Action::SelectThumbnail(1)] {
            v.apply(action, &Handle::current());
        }
        assert_eq!(state(&v), ViewState { current_index: 1, is_playing: false });

        v.apply(Action::TogglePlayPause, &Handle::current());
        elapse(0).await;
        elapse(3000).await;
        v.poll_autoplay();
        assert_eq!(state(&v), ViewState { current_index: 2, is_playing: true });
    }

    #[tokio::test]
    async fn empty_viewer_ignores_input() {
        let mut v = Viewer::new(None, PERIOD);
        v.apply(Action::TogglePlayPause, &Handle::current());
        v.apply(Action::Next, &Handle::current());
        v.poll_autoplay();
        assert!(v.slideshow().is_none());
        assert!(!v.autoplay_running());
    }
}

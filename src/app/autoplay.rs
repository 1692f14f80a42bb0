//! Autoplay timer
//!
//! While running, a task on the app runtime sends one tick per period over a
//! channel owned by the current run. Stopping (or dropping the timer) drops
//! the run: the cancellation guard ends the task and any queued ticks go
//! with the receiver.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

struct Run {
    ticks: mpsc::UnboundedReceiver<()>,
    _cancel: DropGuard,
}

pub struct AutoplayTimer {
    period: Duration,
    run: Option<Run>,
}

impl AutoplayTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, run: None }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Start ticking. The first tick lands one full period from now.
    /// `on_tick` runs on the runtime after each tick is queued.
    pub fn start<F>(&mut self, runtime: &Handle, on_tick: F)
    where
        F: Fn() + Send + 'static,
    {
        if self.run.is_some() {
            return;
        }

        let period = self.period;
        let first = {
            let _enter = runtime.enter();
            Instant::now() + period
        };
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let (tx, rx) = mpsc::unbounded_channel();

        runtime.spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(()).is_err() {
                            break;
                        }
                        on_tick();
                    }
                }
            }
            debug!("Autoplay task finished");
        });

        debug!(period_ms = period.as_millis() as u64, "Autoplay started");
        self.run = Some(Run {
            ticks: rx,
            _cancel: token.drop_guard(),
        });
    }

    pub fn stop(&mut self) {
        if self.run.take().is_some() {
            debug!("Autoplay stopped");
        }
    }

    /// Drain ticks delivered since the last call
    pub fn take_ticks(&mut self) -> usize {
        let Some(run) = self.run.as_mut() else {
            return 0;
        };
        let mut count = 0;
        while run.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

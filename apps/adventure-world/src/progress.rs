//! Progress reporting wrapped around another observer.

use park_core::Tick;
use park_sim::{Snapshot, Summary, TickStats, WorldObserver};

/// Ticks between progress lines.
pub const PROGRESS_EVERY: u64 = 50;

/// Logs a progress line every [`PROGRESS_EVERY`] ticks and forwards every
/// hook to `inner`.
pub struct Progress<O: WorldObserver> {
    pub inner: O,
    max_ticks: u64,
}

impl<O: WorldObserver> Progress<O> {
    pub fn new(inner: O, max_ticks: u64) -> Self {
        Self { inner, max_ticks }
    }
}

impl<O: WorldObserver> WorldObserver for Progress<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        if stats.tick.0.is_multiple_of(PROGRESS_EVERY) {
            tracing::info!(
                tick = stats.tick.0,
                of = self.max_ticks,
                patrons = stats.patrons,
                queuing = stats.queuing,
                riding = stats.riding,
                rides = stats.total_rides,
                "progress"
            );
        }
        self.inner.on_tick_end(stats);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, summary: &Summary) {
        self.inner.on_sim_end(summary);
    }
}

//! World observer trait for progress reporting and data collection.

use park_core::Tick;

use crate::{Snapshot, Summary, TickStats};

/// Callbacks invoked by [`World::run`][crate::World::run] and
/// [`World::run_ticks`][crate::World::run_ticks] between ticks.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl WorldObserver for Progress {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % 50 == 0 {
///             println!("{}: {} patrons", stats.tick, stats.patrons);
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called before the world advances; `tick` is the tick about to run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's statistics have been recorded.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called every `config.output_interval_ticks` ticks, after
    /// `on_tick_end`.  Never called when the interval is 0.
    fn on_snapshot(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called once when [`World::run`][crate::World::run] finishes.
    fn on_sim_end(&mut self, _summary: &Summary) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}

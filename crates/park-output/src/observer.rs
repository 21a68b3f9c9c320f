//! `StatsObserver<W>` — bridges `WorldObserver` to an `OutputWriter`.

use park_sim::{Snapshot, Summary, TickStats, WorldObserver};

use crate::row::{PatronSnapshotRow, RideSnapshotRow, TickStatsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes tick statistics and ride/patron snapshots
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct StatsObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run` does this in `on_sim_end`; call it after
    /// driving the world with `run_ticks` or `step`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for StatsObserver<W> {
    fn on_tick_end(&mut self, stats: &TickStats) {
        let result = self.writer.write_tick_stats(&TickStatsRow::from(stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        let rides: Vec<RideSnapshotRow> = snapshot
            .rides
            .iter()
            .map(|r| RideSnapshotRow::new(snapshot.tick, r))
            .collect();
        let result = self.writer.write_ride_snapshots(&rides);
        self.store_err(result);

        let patrons: Vec<PatronSnapshotRow> = snapshot
            .patrons
            .iter()
            .map(|p| PatronSnapshotRow::new(snapshot.tick, p))
            .collect();
        let result = self.writer.write_patron_snapshots(&patrons);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &Summary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

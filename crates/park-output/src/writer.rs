//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PatronSnapshotRow, RideSnapshotRow, TickStatsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`StatsObserver::take_error`][crate::StatsObserver::take_error].
pub trait OutputWriter {
    /// Write one tick statistics row.
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()>;

    /// Write a batch of ride snapshots.
    fn write_ride_snapshots(&mut self, rows: &[RideSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of patron snapshots.
    fn write_patron_snapshots(&mut self, rows: &[PatronSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! `park-output` — tabular output writers for the park simulation.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                    |
//! |-----------|---------|------------------------------------------------------------------|
//! | *(none)*  | CSV     | `tick_stats.csv`, `ride_snapshots.csv`, `patron_snapshots.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                                                      |
//!
//! Both implement [`OutputWriter`] and are driven by [`StatsObserver`],
//! which implements `park_sim::WorldObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use park_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsObserver::new(writer);
//! world.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::{PatronSnapshotRow, RideSnapshotRow, TickStatsRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

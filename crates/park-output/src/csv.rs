//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_stats.csv`
//! - `ride_snapshots.csv`
//! - `patron_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PatronSnapshotRow, RideSnapshotRow, TickStatsRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    rides:    Writer<File>,
    patrons:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("tick_stats.csv"))?;
        ticks.write_record(["tick", "patrons", "queuing", "riding", "total_rides"])?;

        let mut rides = Writer::from_path(dir.join("ride_snapshots.csv"))?;
        rides.write_record([
            "tick", "ride_id", "name", "kind", "state", "angle", "queue", "riders", "total_riders",
        ])?;

        let mut patrons = Writer::from_path(dir.join("patron_snapshots.csv"))?;
        patrons.write_record(["tick", "patron_id", "x", "y", "state", "color", "ride_id"])?;

        Ok(Self {
            ticks,
            rides,
            patrons,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.patrons.to_string(),
            row.queuing.to_string(),
            row.riding.to_string(),
            row.total_rides.to_string(),
        ])?;
        Ok(())
    }

    fn write_ride_snapshots(&mut self, rows: &[RideSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.rides.write_record(&[
                row.tick.to_string(),
                row.ride_id.to_string(),
                row.name.clone(),
                row.kind.to_owned(),
                row.state.to_owned(),
                format!("{:.3}", row.angle),
                row.queue.clone(),
                row.riders.clone(),
                row.total_riders.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_patron_snapshots(&mut self, rows: &[PatronSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.patrons.write_record(&[
                row.tick.to_string(),
                row.patron_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.to_owned(),
                row.color.to_owned(),
                row.ride_id.map(|r| r.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.rides.flush()?;
        self.patrons.flush()?;
        Ok(())
    }
}

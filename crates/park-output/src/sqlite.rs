//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `tick_stats`, `ride_snapshots` and `patron_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PatronSnapshotRow, RideSnapshotRow, TickStatsRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_stats (
                 tick        INTEGER PRIMARY KEY,
                 patrons     INTEGER NOT NULL,
                 queuing     INTEGER NOT NULL,
                 riding      INTEGER NOT NULL,
                 total_rides INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS ride_snapshots (
                 tick         INTEGER NOT NULL,
                 ride_id      INTEGER NOT NULL,
                 name         TEXT    NOT NULL,
                 kind         TEXT    NOT NULL,
                 state        TEXT    NOT NULL,
                 angle        REAL    NOT NULL,
                 queue        TEXT    NOT NULL,
                 riders       TEXT    NOT NULL,
                 total_riders INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS patron_snapshots (
                 tick      INTEGER NOT NULL,
                 patron_id INTEGER NOT NULL,
                 x         REAL    NOT NULL,
                 y         REAL    NOT NULL,
                 state     TEXT    NOT NULL,
                 color     TEXT    NOT NULL,
                 ride_id   INTEGER
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_stats (tick, patrons, queuing, riding, total_rides) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.tick as i64,
                row.patrons as i64,
                row.queuing as i64,
                row.riding as i64,
                row.total_rides as i64,
            ],
        )?;
        Ok(())
    }

    fn write_ride_snapshots(&mut self, rows: &[RideSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO ride_snapshots \
                 (tick, ride_id, name, kind, state, angle, queue, riders, total_riders) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.ride_id,
                    row.name,
                    row.kind,
                    row.state,
                    row.angle,
                    row.queue,
                    row.riders,
                    row.total_riders as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_patron_snapshots(&mut self, rows: &[PatronSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO patron_snapshots \
                 (tick, patron_id, x, y, state, color, ride_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.patron_id,
                    row.x,
                    row.y,
                    row.state,
                    row.color,
                    row.ride_id,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

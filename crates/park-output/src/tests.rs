//! Integration tests for park-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use park_agents::{RideKind, RideSpec, RoamingBehavior};
    use park_core::{ParkConfig, Point};
    use park_sim::WorldBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::StatsObserver;
    use crate::row::{PatronSnapshotRow, RideSnapshotRow, TickStatsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_stats.csv").exists());
        assert!(dir.path().join("ride_snapshots.csv").exists());
        assert!(dir.path().join("patron_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "tick_stats.csv"), ["tick", "patrons", "queuing", "riding", "total_rides"]);
        assert_eq!(
            headers(&dir, "ride_snapshots.csv"),
            ["tick", "ride_id", "name", "kind", "state", "angle", "queue", "riders", "total_riders"]
        );
        assert_eq!(
            headers(&dir, "patron_snapshots.csv"),
            ["tick", "patron_id", "x", "y", "state", "color", "ride_id"]
        );
    }

    #[test]
    fn tick_stats_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_stats(&TickStatsRow { tick: 3, patrons: 12, queuing: 4, riding: 2, total_rides: 9 })
            .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "tick_stats.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "12", "4", "2", "9"]);
    }

    #[test]
    fn ride_row_lists_queue_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_ride_snapshots(&[RideSnapshotRow {
            tick:         7,
            ride_id:      1,
            name:         "Pirate Ship".into(),
            kind:         "PirateShip",
            state:        "RUNNING",
            angle:        12.5,
            queue:        "4;2;9".into(),
            riders:       String::new(),
            total_riders: 6,
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "ride_snapshots.csv");
        assert_eq!(&rows[0][2], "Pirate Ship");
        assert_eq!(&rows[0][5], "12.500");
        assert_eq!(&rows[0][6], "4;2;9");
        assert_eq!(&rows[0][7], "");
    }

    #[test]
    fn unassigned_patron_has_empty_ride_column() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_patron_snapshots(&[
            PatronSnapshotRow {
                tick: 2, patron_id: 0, x: 10.0, y: 20.25, state: "ROAMING", color: "red", ride_id: None,
            },
            PatronSnapshotRow {
                tick: 2, patron_id: 1, x: 50.0, y: 50.0, state: "QUEUING", color: "navy", ride_id: Some(3),
            },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir, "patron_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "20.250");
        assert_eq!(&rows[0][6], "");
        assert_eq!(&rows[1][6], "3");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_ride_snapshots(&[]).unwrap();
        w.write_patron_snapshots(&[]).unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn integration_csv() {
        let config = ParkConfig {
            width:                 200.0,
            height:                200.0,
            initial_patrons:       5,
            max_ticks:             12,
            seed:                  Some(1),
            output_interval_ticks: 4,
        };
        let ride = RideSpec {
            kind:     RideKind::FerrisWheel,
            center:   Point::new(100.0, 100.0),
            param1:   20.0,
            param2:   0.0,
            capacity: 8,
            duration: 80,
            name:     None,
        };
        let mut world = WorldBuilder::new(config, RoamingBehavior)
            .rides(vec![ride])
            .build()
            .unwrap();

        let dir = tmp();
        let mut obs = StatsObserver::new(CsvWriter::new(dir.path()).unwrap());
        world.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let ticks = read_rows(&dir, "tick_stats.csv");
        assert_eq!(ticks.len(), 12);
        assert_eq!(&ticks[0][0], "1");

        // output_interval = 4 → snapshots at ticks 4, 8, 12, one ride each.
        let rides = read_rows(&dir, "ride_snapshots.csv");
        let snapshot_ticks: Vec<&str> = rides.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(snapshot_ticks, ["4", "8", "12"]);

        let patrons = read_rows(&dir, "patron_snapshots.csv");
        assert!(patrons.len() >= 15, "at least 5 patrons × 3 snapshots, got {}", patrons.len());
    }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use park_agents::{Color, PatronStore, Ride, RideKind, RideSpec};
    use park_core::{Point, RideId, Tick};
    use park_sim::TickStats;

    use crate::row::{PatronSnapshotRow, RideSnapshotRow, TickStatsRow};

    #[test]
    fn tick_stats_row_from_stats() {
        let stats = TickStats { tick: Tick(9), patrons: 3, queuing: 1, riding: 2, total_rides: 40 };
        let row = TickStatsRow::from(&stats);
        assert_eq!(row, TickStatsRow { tick: 9, patrons: 3, queuing: 1, riding: 2, total_rides: 40 });
    }

    #[test]
    fn snapshot_rows_reflect_ride_and_patron() {
        let spec = RideSpec {
            kind:     RideKind::BumperCars,
            center:   Point::new(100.0, 100.0),
            param1:   20.0,
            param2:   20.0,
            capacity: 1,
            duration: 10,
            name:     Some("Dodgems".into()),
        };
        let mut ride = Ride::new(RideId(2), spec).unwrap();
        let mut store = PatronStore::new();
        let a = store.spawn(Point::new(60.0, 60.0), Color::Cyan, Tick(0));
        let b = store.spawn(Point::new(61.0, 60.0), Color::Pink, Tick(0));
        let c = store.spawn(Point::new(62.0, 60.0), Color::Lime, Tick(0));
        for id in [a, b, c] {
            ride.add_to_queue(store.get_mut(id).unwrap()).unwrap();
        }
        ride.step(&mut store);

        let row = RideSnapshotRow::new(Tick(1), &ride);
        assert_eq!(row.name, "Dodgems");
        assert_eq!(row.kind, "BumperCars");
        assert_eq!(row.state, "RUNNING");
        assert_eq!(row.queue, "1;2");
        assert_eq!(row.riders, "0");
        assert_eq!(row.total_riders, 1);

        let row = PatronSnapshotRow::new(Tick(1), store.get(b).unwrap());
        assert_eq!(row.state, "QUEUING");
        assert_eq!(row.color, "pink");
        assert_eq!(row.ride_id, Some(2));
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{PatronSnapshotRow, RideSnapshotRow, TickStatsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_tick_stats() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_stats(&TickStatsRow { tick: 7, patrons: 20, queuing: 5, riding: 8, total_rides: 31 })
            .unwrap();
        w.finish().unwrap();

        let (patrons, total): (i64, i64) = open(&dir)
            .query_row(
                "SELECT patrons, total_rides FROM tick_stats WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(patrons, 20);
        assert_eq!(total, 31);
    }

    #[test]
    fn sqlite_ride_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = |ride_id| RideSnapshotRow {
            tick: 1, ride_id, name: format!("R{ride_id}"), kind: "FerrisWheel", state: "IDLE",
            angle: 4.5, queue: String::new(), riders: String::new(), total_riders: 0,
        };
        w.write_ride_snapshots(&[row(0), row(1), row(2)]).unwrap();
        w.finish().unwrap();

        let count: i64 = open(&dir)
            .query_row("SELECT COUNT(*) FROM ride_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_unassigned_patron_ride_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_patron_snapshots(&[PatronSnapshotRow {
            tick: 0, patron_id: 4, x: 1.0, y: 2.0, state: "ROAMING", color: "red", ride_id: None,
        }])
        .unwrap();
        w.finish().unwrap();

        let ride: Option<i64> = open(&dir)
            .query_row("SELECT ride_id FROM patron_snapshots WHERE patron_id = 4", [], |r| r.get(0))
            .unwrap();
        assert_eq!(ride, None);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

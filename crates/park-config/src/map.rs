//! CSV park-map loader.
//!
//! # CSV format
//!
//! One ride per row, no header.  `name` is optional; without it the ride
//! takes its kind's display name ("Pirate Ship"), not the tag.
//!
//! ```csv
//! # kind,x,y,param1,param2,capacity,duration,name
//! FerrisWheel,50,150,20,0,8,80,Ferris Wheel
//! PirateShip,150,50,30,0,10,50
//! BumperCars,50,50,40,35,8,70
//! RollerCoaster,150,150,20,60,6,60,Tower Drop
//! ```
//!
//! | Kind            | `param1`           | `param2`  |
//! |-----------------|--------------------|-----------|
//! | `FerrisWheel`   | radius             | ignored   |
//! | `PirateShip`    | arm length         | ignored   |
//! | `BumperCars`    | width              | height    |
//! | `RollerCoaster` | width              | height    |
//!
//! Every row is validated as it is read, so a bad capacity or an unknown
//! kind is reported with its line number.  Overlaps between rides are not
//! checked here; the world rejects those at placement time.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use park_agents::{RideKind, RideSpec};
use park_core::Point;

use crate::{ConfigError, ConfigResult, data_rows, describe};

/// Columns every row must have.
const REQUIRED_COLUMNS: usize = 7;

/// Columns read; anything after the name is ignored.
const MAX_COLUMNS: usize = 8;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapRecord {
    kind:     String,
    x:        f64,
    y:        f64,
    param1:   f64,
    param2:   f64,
    capacity: u32,
    duration: u32,
    name:     Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load ride definitions from a map file.
///
/// A row without a name (or with an empty one) gets its kind's display name
/// when the ride is built, e.g. `PirateShip` becomes "Pirate Ship".
pub fn load_map(path: &Path) -> ConfigResult<Vec<RideSpec>> {
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rides = load_map_reader(file)?;
    tracing::debug!(path = %path.display(), rides = rides.len(), "map loaded");
    Ok(rides)
}

/// Like [`load_map`] but accepts any `Read` source.
pub fn load_map_reader<R: Read>(reader: R) -> ConfigResult<Vec<RideSpec>> {
    let mut rides = Vec::new();

    for (line, record) in data_rows(reader)? {
        if record.len() < REQUIRED_COLUMNS {
            return Err(ConfigError::Line {
                line,
                message: format!(
                    "expected at least {REQUIRED_COLUMNS} columns \
                     (kind,x,y,param1,param2,capacity,duration[,name]), found {}",
                    record.len()
                ),
            });
        }
        let mut record: csv::StringRecord = record.iter().take(MAX_COLUMNS).collect();
        if record.len() == REQUIRED_COLUMNS {
            // No name column: an empty field reads as `None`.
            record.push_field("");
        }
        let row: MapRecord = record
            .deserialize(None)
            .map_err(|e| ConfigError::Line { line, message: describe(&e) })?;

        rides.push(to_spec(row, line)?);
    }

    Ok(rides)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_spec(row: MapRecord, line: u64) -> ConfigResult<RideSpec> {
    let kind: RideKind = row
        .kind
        .parse()
        .map_err(|source| ConfigError::Ride { line, source })?;

    let spec = RideSpec {
        kind,
        center:   Point::new(row.x, row.y),
        param1:   row.param1,
        param2:   row.param2,
        capacity: row.capacity,
        duration: row.duration,
        name:     row.name.filter(|n| !n.is_empty()),
    };
    spec.validate().map_err(|source| ConfigError::Ride { line, source })?;
    Ok(spec)
}

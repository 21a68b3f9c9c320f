//! The layout used when no map file is given.

use park_agents::{RideKind, RideSpec};
use park_core::Point;

/// One ride of each kind, one per quadrant of a 200 × 200 park.
pub fn default_rides() -> Vec<RideSpec> {
    let ride = |kind, x, y, param1, param2, capacity, duration| RideSpec {
        kind,
        center: Point::new(x, y),
        param1,
        param2,
        capacity,
        duration,
        name: None,
    };

    vec![
        ride(RideKind::FerrisWheel,   50.0,  150.0, 20.0, 0.0,  8,  80),
        ride(RideKind::PirateShip,    150.0, 50.0,  30.0, 0.0,  10, 50),
        ride(RideKind::BumperCars,    50.0,  50.0,  40.0, 35.0, 8,  70),
        ride(RideKind::RollerCoaster, 150.0, 150.0, 20.0, 60.0, 6,  60),
    ]
}

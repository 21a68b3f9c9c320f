//! Ride kinds and their geometry.
//!
//! All kinds share one state machine (see [`Ride`][crate::Ride]); they differ
//! only in how the construction parameters map to a footprint and in the
//! animation-angle function renderers read each tick.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::AgentError;

/// Peak swing of the pirate ship, in degrees either side of vertical.
pub const SHIP_MAX_SWING_DEG: f64 = 50.0;

/// Degrees the bumper-car ring advances per tick.
pub const ARENA_DEG_PER_TICK: f64 = 10.0;

/// Ferris-wheel footprint side as a multiple of its radius.
pub const WHEEL_FOOTPRINT_FACTOR: f64 = 2.5;

/// Pirate-ship footprint side as a multiple of its arm length.
pub const SHIP_FOOTPRINT_FACTOR: f64 = 1.2;

/// The kind tag carried by every ride.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideKind {
    FerrisWheel,
    PirateShip,
    BumperCars,
    RollerCoaster,
}

impl RideKind {
    pub const ALL: [RideKind; 4] = [
        RideKind::FerrisWheel,
        RideKind::PirateShip,
        RideKind::BumperCars,
        RideKind::RollerCoaster,
    ];

    /// The tag used in map files (`FerrisWheel`, `PirateShip`, …).
    pub fn tag(self) -> &'static str {
        match self {
            RideKind::FerrisWheel   => "FerrisWheel",
            RideKind::PirateShip    => "PirateShip",
            RideKind::BumperCars    => "BumperCars",
            RideKind::RollerCoaster => "RollerCoaster",
        }
    }

    /// Name used when a ride is configured without one.
    pub fn display_name(self) -> &'static str {
        match self {
            RideKind::FerrisWheel   => "Ferris Wheel",
            RideKind::PirateShip    => "Pirate Ship",
            RideKind::BumperCars    => "Bumper Cars",
            RideKind::RollerCoaster => "Roller Coaster",
        }
    }

    /// Animation angle in degrees after `counter` ticks of a `duration`-tick
    /// cycle.
    ///
    /// - wheel: one full turn per run
    /// - ship: a ±50° sine swing, two periods per run
    /// - arena: constant 10°/tick rotation
    /// - tower: two turns per run, driving the car's vertical bounce
    pub fn angle(self, counter: u64, duration: u32) -> f64 {
        let t = counter as f64;
        let d = f64::from(duration.max(1));
        match self {
            RideKind::FerrisWheel   => (t * 360.0 / d) % 360.0,
            RideKind::PirateShip    => SHIP_MAX_SWING_DEG * (2.0 * PI * (t / d) * 2.0).sin(),
            RideKind::BumperCars    => (t * ARENA_DEG_PER_TICK) % 360.0,
            RideKind::RollerCoaster => (t * 720.0 / d) % 360.0,
        }
    }
}

impl fmt::Display for RideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RideKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RideKind::ALL
            .into_iter()
            .find(|k| k.tag() == s.trim())
            .ok_or_else(|| AgentError::UnknownRideKind(s.trim().to_owned()))
    }
}

// ── RideShape ─────────────────────────────────────────────────────────────────

/// Kind-specific geometry.  Renderers switch on this to draw the ride; the
/// simulation only uses [`footprint`][Self::footprint].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideShape {
    Wheel { radius: f64 },
    Ship { length: f64 },
    Arena { width: f64, height: f64 },
    Tower { width: f64, height: f64 },
}

impl RideShape {
    /// Build the shape for `kind` from the one or two size parameters of a
    /// ride definition.  `param2` is ignored by the single-parameter kinds.
    pub fn new(kind: RideKind, param1: f64, param2: f64) -> Self {
        match kind {
            RideKind::FerrisWheel   => RideShape::Wheel { radius: param1 },
            RideKind::PirateShip    => RideShape::Ship { length: param1 },
            RideKind::BumperCars    => RideShape::Arena { width: param1, height: param2 },
            RideKind::RollerCoaster => RideShape::Tower { width: param1, height: param2 },
        }
    }

    pub fn kind(self) -> RideKind {
        match self {
            RideShape::Wheel { .. } => RideKind::FerrisWheel,
            RideShape::Ship { .. }  => RideKind::PirateShip,
            RideShape::Arena { .. } => RideKind::BumperCars,
            RideShape::Tower { .. } => RideKind::RollerCoaster,
        }
    }

    /// `(width, height)` of the unpadded bounding box.
    pub fn footprint(self) -> (f64, f64) {
        match self {
            RideShape::Wheel { radius } => {
                let side = radius * WHEEL_FOOTPRINT_FACTOR;
                (side, side)
            }
            RideShape::Ship { length } => {
                let side = length * SHIP_FOOTPRINT_FACTOR;
                (side, side)
            }
            RideShape::Arena { width, height } | RideShape::Tower { width, height } => {
                (width, height)
            }
        }
    }
}

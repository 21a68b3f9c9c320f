//! Read-only park state passed to every behavior callback.

use park_core::{Point, Tick};

use crate::Ride;

/// Distance from the park edge inside which patrons may not stand.
pub const EDGE_MARGIN: f64 = 5.0;

/// A read-only view of the park passed to every
/// [`BehaviorModel`][crate::BehaviorModel] callback.
///
/// Built by the world at the start of each patron's turn.  It also owns the
/// park's spatial rules, so the world and behavior code consult the same
/// implementation of "where may a patron stand".
pub struct ParkContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    pub width:  f64,
    pub height: f64,

    /// Every ride, indexed by `RideId`.
    pub rides: &'a [Ride],

    /// Spawn/despawn points.  Never empty in a built world.
    pub exits: &'a [Point],
}

impl<'a> ParkContext<'a> {
    #[inline]
    pub fn new(tick: Tick, width: f64, height: f64, rides: &'a [Ride], exits: &'a [Point]) -> Self {
        Self { tick, width, height, rides, exits }
    }

    /// `false` within [`EDGE_MARGIN`] of the park edge or inside any ride's
    /// padded footprint; `true` otherwise.
    pub fn is_valid_position(&self, p: Point) -> bool {
        if p.x < EDGE_MARGIN
            || p.x > self.width - EDGE_MARGIN
            || p.y < EDGE_MARGIN
            || p.y > self.height - EDGE_MARGIN
        {
            return false;
        }
        !self.rides.iter().any(|r| r.contains(p))
    }

    /// The exit closest to `p`; ties go to the earlier exit.
    pub fn nearest_exit(&self, p: Point) -> Option<Point> {
        let mut best: Option<(Point, f64)> = None;
        for &exit in self.exits {
            let d = p.distance(exit);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((exit, d)),
            }
        }
        best.map(|(exit, _)| exit)
    }
}

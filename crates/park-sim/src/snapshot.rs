//! Borrowed views of world state handed to observers.

use park_agents::{PatronStore, Ride};
use park_core::{Point, Tick};

use crate::TickStats;

/// Everything a renderer or output writer needs about one tick, borrowed
/// from the world without copying.
///
/// Rides carry their kind, geometry, state, animation angle, queue and rider
/// list; patrons carry position, state and colour.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub tick:    Tick,
    pub width:   f64,
    pub height:  f64,
    pub rides:   &'a [Ride],
    pub patrons: &'a PatronStore,
    pub exits:   &'a [Point],
    /// Statistics for every tick so far, oldest first.
    pub history: &'a [TickStats],
}

impl Snapshot<'_> {
    /// The newest statistics row, absent before the first step.
    pub fn latest(&self) -> Option<&TickStats> {
        self.history.last()
    }
}

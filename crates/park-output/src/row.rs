//! Plain data row types written by output backends.

use park_agents::{Patron, Ride};
use park_core::Tick;
use park_sim::TickStats;

/// One row per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStatsRow {
    pub tick:        u64,
    pub patrons:     u64,
    pub queuing:     u64,
    pub riding:      u64,
    pub total_rides: u64,
}

impl From<&TickStats> for TickStatsRow {
    fn from(s: &TickStats) -> Self {
        Self {
            tick:        s.tick.0,
            patrons:     s.patrons as u64,
            queuing:     s.queuing as u64,
            riding:      s.riding as u64,
            total_rides: s.total_rides,
        }
    }
}

/// State of one ride at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RideSnapshotRow {
    pub tick:         u64,
    pub ride_id:      u32,
    pub name:         String,
    pub kind:         &'static str,
    pub state:        &'static str,
    pub angle:        f64,
    /// Queued patron ids, front first, separated by `;`.
    pub queue:        String,
    /// Rider ids in boarding order, separated by `;`.
    pub riders:       String,
    pub total_riders: u64,
}

impl RideSnapshotRow {
    pub fn new(tick: Tick, ride: &Ride) -> Self {
        Self {
            tick:         tick.0,
            ride_id:      ride.id.0,
            name:         ride.name.clone(),
            kind:         ride.kind().tag(),
            state:        ride.state().as_str(),
            angle:        ride.angle(),
            queue:        join_ids(ride.queue().iter().map(|p| p.0)),
            riders:       join_ids(ride.riders().iter().map(|p| p.0)),
            total_riders: ride.total_riders(),
        }
    }
}

/// State of one patron at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatronSnapshotRow {
    pub tick:      u64,
    pub patron_id: u32,
    pub x:         f64,
    pub y:         f64,
    pub state:     &'static str,
    pub color:     &'static str,
    /// Ride whose queue or rider list holds the patron.
    pub ride_id:   Option<u32>,
}

impl PatronSnapshotRow {
    pub fn new(tick: Tick, patron: &Patron) -> Self {
        Self {
            tick:      tick.0,
            patron_id: patron.id.0,
            x:         patron.position.x,
            y:         patron.position.y,
            state:     patron.state().as_str(),
            color:     patron.color.as_str(),
            ride_id:   patron.assigned_ride().map(|r| r.0),
        }
    }
}

fn join_ids(ids: impl Iterator<Item = u32>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(";")
}

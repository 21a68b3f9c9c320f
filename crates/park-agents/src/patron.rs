//! Patron state.
//!
//! A patron's movement fields (position, target, counters) are written by its
//! [`BehaviorModel`][crate::BehaviorModel].  Its queue/ride assignment is
//! written only by [`Ride`][crate::Ride] operations: `add_to_queue` moves it
//! to `Queuing`, loading moves it to `Riding`, release returns it to
//! `Roaming`.  The transition to `Leaving` is the patron's own decision.

use std::fmt;

use park_core::{PatronId, Point, RideId, Tick};

/// Ticks after spawning during which a patron does nothing at all.
pub const FROZEN_TICKS: u64 = 5;

/// Patience a roaming patron tolerates before heading for an exit.
pub const MAX_PATIENCE: u32 = 200;

/// Behavioral state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatronState {
    Roaming,
    Queuing,
    Riding,
    Leaving,
}

impl PatronState {
    pub fn as_str(self) -> &'static str {
        match self {
            PatronState::Roaming => "ROAMING",
            PatronState::Queuing => "QUEUING",
            PatronState::Riding  => "RIDING",
            PatronState::Leaving => "LEAVING",
        }
    }
}

impl fmt::Display for PatronState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic patron colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Blue,
    Green,
    Purple,
    Magenta,
    Cyan,
    Brown,
    Pink,
    Orange,
    Lime,
    Navy,
    Maroon,
}

impl Color {
    pub const PALETTE: [Color; 12] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Magenta,
        Color::Cyan,
        Color::Brown,
        Color::Pink,
        Color::Orange,
        Color::Lime,
        Color::Navy,
        Color::Maroon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red     => "red",
            Color::Blue    => "blue",
            Color::Green   => "green",
            Color::Purple  => "purple",
            Color::Magenta => "magenta",
            Color::Cyan    => "cyan",
            Color::Brown   => "brown",
            Color::Pink    => "pink",
            Color::Orange  => "orange",
            Color::Lime    => "lime",
            Color::Navy    => "navy",
            Color::Maroon  => "maroon",
        }
    }
}

/// Where a patron is currently steering.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringTarget {
    /// Walking to `ride`, aiming at its centre.
    Ride { ride: RideId, point: Point },
    /// Wandering to a free point.
    Roam(Point),
}

impl SteeringTarget {
    pub fn point(self) -> Point {
        match self {
            SteeringTarget::Ride { point, .. } | SteeringTarget::Roam(point) => point,
        }
    }

    pub fn ride(self) -> Option<RideId> {
        match self {
            SteeringTarget::Ride { ride, .. } => Some(ride),
            SteeringTarget::Roam(_) => None,
        }
    }
}

/// A visitor in the park.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patron {
    pub id:    PatronId,
    pub name:  String,
    pub color: Color,

    pub position: Point,
    pub target:   Option<SteeringTarget>,

    /// Incremented every active tick; reset to 0 when joining a queue.
    pub patience:     u32,
    pub max_patience: u32,

    /// Consecutive rejected steps toward the current target.
    pub stuck_counter: u32,

    /// Queues joined so far.
    pub rides_taken: u32,

    pub spawn_tick:   Tick,
    pub frozen_ticks: u64,

    state: PatronState,
    ride:  Option<RideId>,
}

impl Patron {
    /// A fresh roaming patron standing at `position`.
    pub fn new(id: PatronId, position: Point, color: Color, spawn_tick: Tick) -> Self {
        Self {
            id,
            name: format!("P{}", id.0),
            color,
            position,
            target: None,
            patience: 0,
            max_patience: MAX_PATIENCE,
            stuck_counter: 0,
            rides_taken: 0,
            spawn_tick,
            frozen_ticks: FROZEN_TICKS,
            state: PatronState::Roaming,
            ride: None,
        }
    }

    #[inline]
    pub fn state(&self) -> PatronState {
        self.state
    }

    /// The ride whose queue or rider list holds this patron.  `Some` exactly
    /// when the state is `Queuing` or `Riding`.
    #[inline]
    pub fn assigned_ride(&self) -> Option<RideId> {
        self.ride
    }

    /// `true` while the patron is still inside its post-spawn freeze.
    #[inline]
    pub fn is_frozen(&self, now: Tick) -> bool {
        now.since(self.spawn_tick) < self.frozen_ticks
    }

    /// Give up on roaming and head for an exit.  Only a roaming patron can
    /// leave; queued and riding patrons are committed.
    pub fn start_leaving(&mut self) -> bool {
        if self.state != PatronState::Roaming {
            return false;
        }
        self.state = PatronState::Leaving;
        self.target = None;
        true
    }

    // ── Ride-side transitions ─────────────────────────────────────────────

    pub(crate) fn enqueue(&mut self, ride: RideId) {
        self.state = PatronState::Queuing;
        self.ride = Some(ride);
        self.target = None;
    }

    pub(crate) fn board(&mut self) {
        self.state = PatronState::Riding;
    }

    pub(crate) fn release(&mut self) {
        self.state = PatronState::Roaming;
        self.ride = None;
        self.target = None;
    }
}

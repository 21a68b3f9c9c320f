//! The ride state machine.
//!
//! ```text
//!        queue non-empty            ≥1 rider admitted
//!  IDLE ───────────────▶ LOADING ───────────────────▶ RUNNING
//!   ▲                                                    │
//!   └──────────── counter reaches duration: release ─────┘
//! ```
//!
//! Loading runs in the same step the ride leaves `Idle`, so a patron that
//! joined the queue during tick `t` is riding after the ride phase of
//! tick `t + 1`.  The run length is measured from the tick the ride entered
//! `Running`.

use std::collections::VecDeque;
use std::fmt;

use park_core::{Bounds, PatronId, Point, RideId};

use crate::{AgentError, AgentResult, Patron, PatronStore, RideKind, RideShape};

/// Padding added around a ride's footprint for patron collision tests.
pub const RIDE_PADDING: f64 = 5.0;

// ── RideSpec ──────────────────────────────────────────────────────────────────

/// Everything needed to construct a ride — one row of a map file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideSpec {
    pub kind:     RideKind,
    pub center:   Point,
    /// Radius (wheel), arm length (ship) or width (arena, tower).
    pub param1:   f64,
    /// Height for arena and tower; ignored otherwise.
    pub param2:   f64,
    pub capacity: u32,
    pub duration: u32,
    pub name:     Option<String>,
}

impl RideSpec {
    /// The configured name, or the kind's display name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.display_name())
    }

    /// Check the definition without building a ride.
    pub fn validate(&self) -> AgentResult<()> {
        let invalid = |reason: String| AgentError::InvalidRide {
            name: self.display_name().to_owned(),
            reason,
        };

        if self.capacity == 0 {
            return Err(invalid("capacity must be positive".into()));
        }
        if self.duration == 0 {
            return Err(invalid("duration must be positive".into()));
        }
        if !self.center.is_finite() {
            return Err(invalid(format!("center {} is not finite", self.center)));
        }
        let (w, h) = RideShape::new(self.kind, self.param1, self.param2).footprint();
        if !(w.is_finite() && w > 0.0 && h.is_finite() && h > 0.0) {
            return Err(invalid(format!(
                "size parameters ({}, {}) give a non-positive footprint",
                self.param1, self.param2
            )));
        }
        Ok(())
    }
}

// ── RideState ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideState {
    Idle,
    Loading,
    Running,
}

impl RideState {
    pub fn as_str(self) -> &'static str {
        match self {
            RideState::Idle    => "IDLE",
            RideState::Loading => "LOADING",
            RideState::Running => "RUNNING",
        }
    }
}

impl fmt::Display for RideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Ride ──────────────────────────────────────────────────────────────────────

/// A fixed attraction with a bounded rider list and a FIFO queue.
///
/// Queue and rider lists hold `PatronId`s; the patrons themselves live in a
/// [`PatronStore`] that ride operations receive by `&mut`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ride {
    pub id:       RideId,
    pub name:     String,
    pub shape:    RideShape,
    pub center:   Point,
    pub width:    f64,
    pub height:   f64,
    pub capacity: u32,
    pub duration: u32,

    state:        RideState,
    queue:        VecDeque<PatronId>,
    riders:       Vec<PatronId>,
    counter:      u64,
    total_riders: u64,
    angle:        f64,
}

impl Ride {
    /// Validate `spec` and build an idle, empty ride.
    pub fn new(id: RideId, spec: RideSpec) -> AgentResult<Self> {
        spec.validate()?;
        let shape = RideShape::new(spec.kind, spec.param1, spec.param2);
        let (width, height) = shape.footprint();
        let name = spec.display_name().to_owned();
        Ok(Self {
            id,
            name,
            shape,
            center: spec.center,
            width,
            height,
            capacity: spec.capacity,
            duration: spec.duration,
            state: RideState::Idle,
            queue: VecDeque::new(),
            riders: Vec::new(),
            counter: 0,
            total_riders: 0,
            angle: 0.0,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> RideKind {
        self.shape.kind()
    }

    #[inline]
    pub fn state(&self) -> RideState {
        self.state
    }

    /// Waiting patrons, front of the line first.
    #[inline]
    pub fn queue(&self) -> &VecDeque<PatronId> {
        &self.queue
    }

    #[inline]
    pub fn riders(&self) -> &[PatronId] {
        &self.riders
    }

    /// Patrons admitted since the ride was built.
    #[inline]
    pub fn total_riders(&self) -> u64 {
        self.total_riders
    }

    /// Animation angle in degrees, recomputed every step.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Ticks since the current phase began.
    #[inline]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// The unpadded footprint.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.width, self.height)
    }

    /// `true` if the two unpadded footprints intersect.
    pub fn overlaps(&self, other: &Ride) -> bool {
        self.bounds().intersects(other.bounds())
    }

    /// `true` if `p` is within [`RIDE_PADDING`] of the footprint.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().padded(RIDE_PADDING).contains(p)
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Append `patron` to the back of the queue and mark it `Queuing` here.
    ///
    /// There is no capacity check; only loading enforces capacity.  A patron
    /// already assigned to a ride is refused.
    pub fn add_to_queue(&mut self, patron: &mut Patron) -> AgentResult<()> {
        if let Some(ride) = patron.assigned_ride() {
            return Err(AgentError::AlreadyAssigned { patron: patron.id, ride });
        }
        self.queue.push_back(patron.id);
        patron.enqueue(self.id);
        tracing::trace!(ride = %self.name, patron = %patron.name, queue = self.queue.len(), "joined queue");
        Ok(())
    }

    /// Advance the ride by one tick.
    pub fn step(&mut self, patrons: &mut PatronStore) {
        self.counter += 1;
        self.angle = self.kind().angle(self.counter, self.duration);

        match self.state {
            RideState::Idle => {
                if !self.queue.is_empty() {
                    self.state = RideState::Loading;
                    self.load(patrons);
                }
            }
            RideState::Loading => self.load(patrons),
            RideState::Running => {
                if self.counter >= u64::from(self.duration) {
                    self.release_all(patrons);
                }
            }
        }
    }

    /// Drop every reference to `patron` from the queue and rider list.
    ///
    /// Returns `true` if anything was removed.
    pub fn forget(&mut self, patron: PatronId) -> bool {
        let before = self.queue.len() + self.riders.len();
        self.queue.retain(|&p| p != patron);
        self.riders.retain(|&p| p != patron);
        before != self.queue.len() + self.riders.len()
    }

    fn load(&mut self, patrons: &mut PatronStore) {
        while self.riders.len() < self.capacity as usize {
            let Some(id) = self.queue.pop_front() else {
                break;
            };
            let Some(patron) = patrons.get_mut(id) else {
                continue;
            };
            patron.board();
            self.riders.push(id);
            self.total_riders += 1;
        }

        if !self.riders.is_empty() {
            self.state = RideState::Running;
            self.counter = 0;
            tracing::trace!(ride = %self.name, riders = self.riders.len(), "running");
        }
    }

    fn release_all(&mut self, patrons: &mut PatronStore) {
        for id in self.riders.drain(..) {
            if let Some(patron) = patrons.get_mut(id) {
                patron.release();
            }
        }
        self.state = RideState::Idle;
        self.counter = 0;
        tracing::trace!(ride = %self.name, "released riders");
    }
}

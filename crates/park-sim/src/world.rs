//! The `World` struct and its tick loop.

use park_agents::{
    BehaviorModel, Color, Intent, ParkContext, Patron, PatronState, PatronStore, Ride, RideSpec,
};
use park_core::{ParkConfig, PatronId, Point, RideId, SimRng, Tick};

use crate::{Snapshot, SimError, SimResult, Summary, RideSummary, TickStats, WorldObserver};

/// Per-tick chance of a new patron arriving.
pub const SPAWN_PROBABILITY: f64 = 0.2;

/// No spawns while this many patrons are present.
pub const MAX_PATRONS: usize = 30;

/// Horizontal spawn jitter around an exit: x ∈ [-5, 5).
pub const SPAWN_JITTER_X: f64 = 5.0;

/// Vertical spawn jitter around an exit: y ∈ [-10, 10).
pub const SPAWN_JITTER_Y: f64 = 10.0;

/// Outcome of [`World::add_ride`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Placed(RideId),
    /// Not added: the footprint intersects this existing ride.
    Overlaps(RideId),
}

/// A ride definition the builder could not place.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedRide {
    pub spec:     RideSpec,
    pub overlaps: RideId,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The park: rides, patrons, exits, and the tick loop that drives them.
///
/// `World<B>` owns all simulation state and the single [`SimRng`]; `B` decides
/// what each patron does.  Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<B: BehaviorModel> {
    pub config: ParkConfig,

    /// The behavior model.  Called once per active patron per tick.
    pub behavior: B,

    tick:     Tick,
    rides:    Vec<Ride>,
    patrons:  PatronStore,
    exits:    Vec<Point>,
    rng:      SimRng,
    entered:  u64,
    left:     u64,
    history:  Vec<TickStats>,
    rejected: Vec<RejectedRide>,
}

impl<B: BehaviorModel> World<B> {
    /// Assemble a world from validated parts.  Rides are added afterwards
    /// through [`add_ride`][Self::add_ride].
    pub(crate) fn from_parts(config: ParkConfig, behavior: B, exits: Vec<Point>, rng: SimRng) -> Self {
        Self {
            config,
            behavior,
            tick: Tick::ZERO,
            rides: Vec::new(),
            patrons: PatronStore::new(),
            exits,
            rng,
            entered: 0,
            left: 0,
            history: Vec::new(),
            rejected: Vec::new(),
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run until `config.max_ticks` and return the final summary.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<Summary> {
        while self.tick.0 < self.config.max_ticks {
            self.observed_step(observer)?;
        }
        let summary = self.summary();
        observer.on_sim_end(&summary);
        tracing::info!(
            ticks = summary.ticks,
            entered = summary.entered,
            left = summary.left,
            total_rides = summary.total_rides,
            "simulation complete"
        );
        Ok(summary)
    }

    /// Run exactly `n` more ticks, ignoring `max_ticks`.
    ///
    /// Useful for tests and incremental stepping.  `on_sim_end` is not called.
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    fn observed_step<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.tick.next());
        let stats = self.step()?;
        observer.on_tick_end(&stats);
        let every = self.config.output_interval_ticks;
        if every > 0 && stats.tick.0.is_multiple_of(every) {
            observer.on_snapshot(&self.snapshot());
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the world by one tick and return its statistics.
    ///
    /// An intent the world cannot apply (an unknown ride, a patron already
    /// assigned elsewhere) is logged and dropped; the tick still completes.
    pub fn step(&mut self) -> SimResult<TickStats> {
        self.tick = self.tick.next();
        let now = self.tick;

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        if self.rng.gen_bool(SPAWN_PROBABILITY) && self.patrons.len() < MAX_PATRONS {
            self.spawn_patron();
        }

        // ── Phase 2: rides ────────────────────────────────────────────────
        for ride in &mut self.rides {
            ride.step(&mut self.patrons);
        }

        // ── Phase 3: patrons ──────────────────────────────────────────────
        //
        // Intents are applied before the next patron acts, so a patron that
        // joins a queue is visible to everyone after it this tick.
        for id in self.patrons.ids() {
            let Some(patron) = self.patrons.get_mut(id) else {
                continue;
            };
            if patron.is_frozen(now) {
                continue;
            }
            let ctx = ParkContext::new(now, self.config.width, self.config.height, &self.rides, &self.exits);
            let intent = self.behavior.act(patron, &ctx, &mut self.rng);

            match intent {
                Some(Intent::JoinQueue(ride)) => {
                    if let Err(error) = self.join_queue(id, ride) {
                        tracing::warn!(patron = %id, %ride, %error, "join-queue intent rejected");
                    }
                }
                Some(Intent::Exit) => {
                    self.remove_patron(id);
                }
                None => {}
            }
        }

        // ── Phase 4: statistics ───────────────────────────────────────────
        let stats = self.current_stats();
        self.history.push(stats);
        Ok(stats)
    }

    fn join_queue(&mut self, patron: PatronId, ride: RideId) -> SimResult<()> {
        let ride = self
            .rides
            .get_mut(ride.index())
            .ok_or(SimError::UnknownRide(ride))?;
        if let Some(patron) = self.patrons.get_mut(patron) {
            ride.add_to_queue(patron)?;
        }
        Ok(())
    }

    fn current_stats(&self) -> TickStats {
        TickStats {
            tick:        self.tick,
            patrons:     self.patrons.len(),
            queuing:     self.patrons.count_in(PatronState::Queuing),
            riding:      self.patrons.count_in(PatronState::Riding),
            total_rides: self.total_rides(),
        }
    }

    // ── Rides ─────────────────────────────────────────────────────────────

    /// Build a ride from `spec` and place it unless its footprint intersects
    /// an existing ride.
    ///
    /// An invalid definition is an error; an overlap is not, the ride list is
    /// simply left unchanged.
    pub fn add_ride(&mut self, spec: RideSpec) -> SimResult<Placement> {
        let id = RideId(self.rides.len() as u32);
        let ride = Ride::new(id, spec)?;
        if let Some(existing) = self.rides.iter().find(|r| r.overlaps(&ride)) {
            tracing::warn!(ride = %ride.name, overlaps = %existing.name, "ride overlaps an existing ride; not placed");
            return Ok(Placement::Overlaps(existing.id));
        }
        tracing::debug!(ride = %ride.name, kind = %ride.kind(), center = %ride.center, "ride placed");
        self.rides.push(ride);
        Ok(Placement::Placed(id))
    }

    pub(crate) fn record_rejection(&mut self, spec: RideSpec, overlaps: RideId) {
        self.rejected.push(RejectedRide { spec, overlaps });
    }

    // ── Patrons ───────────────────────────────────────────────────────────

    /// Spawn a patron near a random exit.
    ///
    /// Draws, in order: exit index, x jitter, y jitter, colour.
    pub fn spawn_patron(&mut self) -> PatronId {
        // `exits` is never empty in a built world.
        let exit = self.exits[self.rng.gen_range(0..self.exits.len())];
        let dx = self.rng.gen_range(-SPAWN_JITTER_X..SPAWN_JITTER_X);
        let dy = self.rng.gen_range(-SPAWN_JITTER_Y..SPAWN_JITTER_Y);
        self.spawn_patron_at(Point::new(exit.x + dx, exit.y + dy))
    }

    /// Spawn a patron at exactly `position` with a random colour.
    pub fn spawn_patron_at(&mut self, position: Point) -> PatronId {
        let color = *self.rng.choose(&Color::PALETTE).unwrap_or(&Color::Red);
        let id = self.patrons.spawn(position, color, self.tick);
        self.entered += 1;
        tracing::debug!(patron = %id, tick = %self.tick, %position, "patron entered");
        id
    }

    /// Remove a patron from the park and from any ride queue or rider list.
    ///
    /// Returns `false`, and changes nothing, if the patron is not present.
    pub fn remove_patron(&mut self, id: PatronId) -> bool {
        if self.patrons.remove(id).is_none() {
            return false;
        }
        for ride in &mut self.rides {
            ride.forget(id);
        }
        self.left += 1;
        tracing::debug!(patron = %id, tick = %self.tick, "patron left");
        true
    }

    // ── Spatial rules ─────────────────────────────────────────────────────

    /// The read-only view behaviors receive.
    pub fn context(&self) -> ParkContext<'_> {
        ParkContext::new(self.tick, self.config.width, self.config.height, &self.rides, &self.exits)
    }

    pub fn is_valid_position(&self, p: Point) -> bool {
        self.context().is_valid_position(p)
    }

    /// The exit closest to `p`; ties go to the earlier exit.
    pub fn nearest_exit(&self, p: Point) -> Option<Point> {
        self.context().nearest_exit(p)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    #[inline]
    pub fn ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(id.index())
    }

    #[inline]
    pub fn patrons(&self) -> &PatronStore {
        &self.patrons
    }

    #[inline]
    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id)
    }

    /// Mutable access to a patron's movement fields.  Queue and ride
    /// assignment stay under ride control.
    #[inline]
    pub fn patron_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        self.patrons.get_mut(id)
    }

    #[inline]
    pub fn exits(&self) -> &[Point] {
        &self.exits
    }

    /// Statistics for every tick so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[TickStats] {
        &self.history
    }

    /// Ride definitions the builder skipped because they overlapped.
    #[inline]
    pub fn rejected_rides(&self) -> &[RejectedRide] {
        &self.rejected
    }

    #[inline]
    pub fn entered(&self) -> u64 {
        self.entered
    }

    #[inline]
    pub fn left(&self) -> u64 {
        self.left
    }

    /// Sum of every ride's served counter.
    pub fn total_rides(&self) -> u64 {
        self.rides.iter().map(Ride::total_riders).sum()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick:    self.tick,
            width:   self.config.width,
            height:  self.config.height,
            rides:   &self.rides,
            patrons: &self.patrons,
            exits:   &self.exits,
            history: &self.history,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            ticks:       self.tick.0,
            entered:     self.entered,
            left:        self.left,
            remaining:   self.patrons.len(),
            total_rides: self.total_rides(),
            rides:       self.rides.iter().map(RideSummary::from).collect(),
        }
    }
}

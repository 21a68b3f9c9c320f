//! Fluent builder for constructing a [`World`].

use park_agents::{BehaviorModel, RideSpec};
use park_core::{ParkConfig, Point, SimRng};

use crate::{Placement, SimError, SimResult, World};

/// Distance of the default exits from the left and right edges.
pub const EXIT_INSET: f64 = 10.0;

/// Fluent builder for [`World<B>`].
///
/// # Required inputs
///
/// - [`ParkConfig`] — dimensions, tick count, seed, initial patrons, …
/// - `B: BehaviorModel` — the patron behavior
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                         |
/// |---------------|-------------------------------------------------|
/// | `.rides(v)`   | No rides                                        |
/// | `.exits(v)`   | `(10, h/2)` and `(w-10, h/2)`                   |
/// | `.rng(r)`     | `SimRng::from_seed(config.seed)`                |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, RoamingBehavior)
///     .rides(specs)
///     .build()?;
/// for rejected in world.rejected_rides() {
///     eprintln!("skipped {}", rejected.spec.display_name());
/// }
/// world.run(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder<B: BehaviorModel> {
    config:   ParkConfig,
    behavior: B,
    rides:    Vec<RideSpec>,
    exits:    Option<Vec<Point>>,
    rng:      Option<SimRng>,
}

impl<B: BehaviorModel> WorldBuilder<B> {
    pub fn new(config: ParkConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            rides: Vec::new(),
            exits: None,
            rng:   None,
        }
    }

    /// Ride definitions, placed in order.  A definition that overlaps an
    /// earlier one is skipped and listed in
    /// [`World::rejected_rides`][crate::World::rejected_rides].
    pub fn rides(mut self, rides: Vec<RideSpec>) -> Self {
        self.rides = rides;
        self
    }

    /// Replace the default exits.  Must not be empty.
    pub fn exits(mut self, exits: Vec<Point>) -> Self {
        self.exits = Some(exits);
        self
    }

    /// Inject a random source, overriding `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, place rides, spawn the initial patrons at tick 0, and
    /// return a ready-to-run [`World`].
    pub fn build(self) -> SimResult<World<B>> {
        self.config.validate()?;
        let (w, h) = (self.config.width, self.config.height);

        // ── Exits ─────────────────────────────────────────────────────────
        let exits = self.exits.unwrap_or_else(|| {
            vec![Point::new(EXIT_INSET, h / 2.0), Point::new(w - EXIT_INSET, h / 2.0)]
        });
        if exits.is_empty() {
            return Err(SimError::Config("at least one exit is required".into()));
        }
        if let Some(bad) = exits.iter().find(|p| !p.is_finite()) {
            return Err(SimError::Config(format!("exit {bad} is not finite")));
        }

        // ── Rides ─────────────────────────────────────────────────────────
        //
        // Every definition is validated before any is placed, so a bad row
        // fails the build even when it comes after an overlapping one.
        for spec in &self.rides {
            spec.validate()?;
        }

        let rng = self.rng.unwrap_or_else(|| SimRng::from_seed(self.config.seed));
        let initial = self.config.initial_patrons;
        let mut world = World::from_parts(self.config, self.behavior, exits, rng);

        for spec in self.rides {
            if let Placement::Overlaps(existing) = world.add_ride(spec.clone())? {
                world.record_rejection(spec, existing);
            }
        }

        // ── Initial patrons ───────────────────────────────────────────────
        for _ in 0..initial {
            world.spawn_patron();
        }

        tracing::info!(
            width = w,
            height = h,
            rides = world.rides().len(),
            rejected = world.rejected_rides().len(),
            patrons = initial,
            "world built"
        );
        Ok(world)
    }
}

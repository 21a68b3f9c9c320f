//! The standard patron behavior: wander, pick rides, queue, eventually leave.
//!
//! Per active tick a patron's patience grows by one.  A roaming patron
//! occasionally picks a ride whose queue is short and walks toward its
//! centre; close enough, it asks to join the queue.  Otherwise it wanders
//! between random interior points.  A roaming patron whose patience runs out
//! walks to the nearest exit and asks to be removed.

use park_core::{Point, SimRng};

use crate::{BehaviorModel, Intent, ParkContext, Patron, PatronState, Ride, SteeringTarget};

/// Units moved per tick.
pub const WALK_SPEED: f64 = 2.0;

/// Per-tick chance a roaming patron without a ride target looks for one.
pub const RIDE_SEEK_PROBABILITY: f64 = 0.08;

/// Per-tick chance a wandering patron abandons its roam point for a new one.
pub const NEW_ROAM_POINT_PROBABILITY: f64 = 0.05;

/// Rides with this many or more queued patrons are not considered.
pub const QUEUE_SOFT_CAP: usize = 8;

/// Distance from a ride's centre at which a patron joins its queue.
pub const RIDE_ARRIVAL_RADIUS: f64 = 35.0;

/// Distance at which a roam point counts as reached.
pub const ROAM_ARRIVAL_RADIUS: f64 = 5.0;

/// Distance from an exit at which a leaving patron is removed.
pub const EXIT_RADIUS: f64 = 3.0;

/// Rejected steps tolerated before the current target is dropped.
pub const STUCK_LIMIT: u32 = 10;

/// Roam points are drawn at least this far from every park edge.
pub const ROAM_INSET: f64 = 20.0;

/// The default [`BehaviorModel`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RoamingBehavior;

impl BehaviorModel for RoamingBehavior {
    fn act(
        &self,
        patron: &mut Patron,
        ctx:    &ParkContext<'_>,
        rng:    &mut SimRng,
    ) -> Option<Intent> {
        patron.patience += 1;

        let intent = match patron.state() {
            PatronState::Roaming => roam(patron, ctx, rng),
            PatronState::Leaving => leave(patron, ctx),
            PatronState::Queuing | PatronState::Riding => None,
        };

        if patron.state() == PatronState::Roaming && patron.patience > patron.max_patience {
            patron.start_leaving();
            tracing::trace!(patron = %patron.name, tick = %ctx.tick, "out of patience");
        }

        intent
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

enum Steer {
    Arrived,
    Moved,
    Blocked,
}

/// Take one step toward `goal`, or report arrival within `radius`.
///
/// A step into an invalid position is refused and counted on the patron's
/// stuck counter; a successful step clears it.
fn steer(patron: &mut Patron, goal: Point, radius: f64, ctx: &ParkContext<'_>) -> Steer {
    if patron.position.distance(goal) < radius {
        return Steer::Arrived;
    }
    let next = patron.position.step_toward(goal, WALK_SPEED);
    if ctx.is_valid_position(next) {
        patron.position = next;
        patron.stuck_counter = 0;
        Steer::Moved
    } else {
        patron.stuck_counter += 1;
        Steer::Blocked
    }
}

fn drop_target_if_stuck(patron: &mut Patron) {
    if patron.stuck_counter > STUCK_LIMIT {
        patron.target = None;
        patron.stuck_counter = 0;
    }
}

fn roam(patron: &mut Patron, ctx: &ParkContext<'_>, rng: &mut SimRng) -> Option<Intent> {
    let seeking_ride = matches!(patron.target, Some(SteeringTarget::Ride { .. }));
    if !seeking_ride && rng.gen_bool(RIDE_SEEK_PROBABILITY) {
        let open: Vec<&Ride> = ctx
            .rides
            .iter()
            .filter(|r| r.queue().len() < QUEUE_SOFT_CAP)
            .collect();
        if let Some(ride) = rng.choose(&open) {
            patron.target = Some(SteeringTarget::Ride { ride: ride.id, point: ride.center });
            patron.stuck_counter = 0;
        }
    }

    if let Some(SteeringTarget::Ride { ride, point }) = patron.target {
        return match steer(patron, point, RIDE_ARRIVAL_RADIUS, ctx) {
            Steer::Arrived => {
                patron.rides_taken += 1;
                patron.patience = 0;
                patron.target = None;
                patron.stuck_counter = 0;
                Some(Intent::JoinQueue(ride))
            }
            Steer::Moved => None,
            Steer::Blocked => {
                drop_target_if_stuck(patron);
                None
            }
        };
    }

    // Free wandering.  The re-roll is only drawn when a point already exists.
    let goal = match patron.target {
        Some(SteeringTarget::Roam(p)) if !rng.gen_bool(NEW_ROAM_POINT_PROBABILITY) => p,
        _ => {
            let p = random_interior_point(ctx, rng);
            patron.target = Some(SteeringTarget::Roam(p));
            patron.stuck_counter = 0;
            p
        }
    };

    match steer(patron, goal, ROAM_ARRIVAL_RADIUS, ctx) {
        Steer::Arrived => patron.target = None,
        Steer::Moved => {}
        Steer::Blocked => drop_target_if_stuck(patron),
    }
    None
}

fn leave(patron: &mut Patron, ctx: &ParkContext<'_>) -> Option<Intent> {
    let exit = ctx.nearest_exit(patron.position)?;
    if patron.position.distance(exit) < EXIT_RADIUS {
        return Some(Intent::Exit);
    }
    patron.position = patron.position.step_toward(exit, WALK_SPEED);
    None
}

/// Uniform point at least [`ROAM_INSET`] from every edge.  An axis too short
/// to hold the inset collapses to its midpoint.
pub fn random_interior_point(ctx: &ParkContext<'_>, rng: &mut SimRng) -> Point {
    let mut axis = |extent: f64| {
        let (lo, hi) = (ROAM_INSET, extent - ROAM_INSET);
        if lo < hi { rng.gen_range(lo..hi) } else { extent / 2.0 }
    };
    let x = axis(ctx.width);
    let y = axis(ctx.height);
    Point::new(x, y)
}

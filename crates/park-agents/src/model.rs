//! The `BehaviorModel` trait — how patrons decide what to do each tick.

use park_core::SimRng;

use crate::{Intent, ParkContext, Patron};

/// Pluggable patron behavior.
///
/// The world calls [`act`][Self::act] once per tick for every patron that is
/// past its frozen period, in spawn order.  The model may change the patron's
/// movement fields and may move a roaming patron to `Leaving`; everything that
/// touches a ride is requested through the returned [`Intent`].
///
/// All randomness must come from `rng` so seeded runs stay reproducible.
///
/// # Example
///
/// ```rust,ignore
/// struct Homebodies;
///
/// impl BehaviorModel for Homebodies {
///     fn act(&self, patron: &mut Patron, _ctx: &ParkContext<'_>, _rng: &mut SimRng) -> Option<Intent> {
///         patron.start_leaving();
///         None
///     }
/// }
/// ```
pub trait BehaviorModel {
    fn act(
        &self,
        patron: &mut Patron,
        ctx:    &ParkContext<'_>,
        rng:    &mut SimRng,
    ) -> Option<Intent>;
}

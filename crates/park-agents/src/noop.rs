//! A no-op behavior model — patrons never act.

use park_core::SimRng;

use crate::{BehaviorModel, Intent, ParkContext, Patron};

/// A [`BehaviorModel`] that leaves every patron exactly where it is.
///
/// Useful in tests that drive rides by hand, or for a static crowd that only
/// fills space.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn act(
        &self,
        _patron: &mut Patron,
        _ctx:    &ParkContext<'_>,
        _rng:    &mut SimRng,
    ) -> Option<Intent> {
        None
    }
}

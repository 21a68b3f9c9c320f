//! Patron intents — requests a behavior hands back to the world.

use park_core::RideId;

/// Something a patron wants done that it cannot do to itself.
///
/// Produced by [`BehaviorModel::act`][crate::BehaviorModel::act] and applied
/// by the world immediately, before the next patron acts, so later patrons
/// see the updated queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Reached the ride; join the back of its queue.
    JoinQueue(RideId),

    /// Reached an exit while leaving; remove the patron from the park.
    Exit,
}

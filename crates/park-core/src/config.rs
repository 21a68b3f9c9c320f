//! Run-level configuration.

use crate::{ParkError, ParkResult};

/// Top-level simulation configuration.
///
/// Typically loaded from a parameter CSV by `park-config` and passed to
/// `WorldBuilder`.  Call [`validate`][Self::validate] (the builder does) before
/// running any tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkConfig {
    /// Park width in units.  Must be positive.
    pub width: f64,

    /// Park height in units.  Must be positive.
    pub height: f64,

    /// Patrons spawned at tick 0, before the first step.
    pub initial_patrons: u32,

    /// Total ticks `World::run` simulates.
    pub max_ticks: u64,

    /// Master RNG seed.  `None` draws a seed from the OS, so runs are not
    /// reproducible.
    pub seed: Option<u64>,

    /// Emit a full snapshot to observers every N ticks.  0 disables
    /// snapshots; tick statistics are still reported every tick.
    pub output_interval_ticks: u64,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            width:                 200.0,
            height:                200.0,
            initial_patrons:       10,
            max_ticks:             400,
            seed:                  None,
            output_interval_ticks: 1,
        }
    }
}

impl ParkConfig {
    /// Reject dimensions that would make the park meaningless.
    pub fn validate(&self) -> ParkResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ParkError::Config(format!(
                "park width must be a positive number, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ParkError::Config(format!(
                "park height must be a positive number, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

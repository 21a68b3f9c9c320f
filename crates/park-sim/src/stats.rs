//! Per-tick statistics and the end-of-run summary.

use std::fmt;

use park_agents::{Ride, RideKind, RideState};
use park_core::Tick;

/// Aggregate counts recorded at the end of every tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    pub tick:        Tick,
    /// Patrons present in the park.
    pub patrons:     usize,
    pub queuing:     usize,
    pub riding:      usize,
    /// Sum of every ride's served counter.
    pub total_rides: u64,
}

/// Final state of one ride.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideSummary {
    pub name:         String,
    pub kind:         RideKind,
    pub state:        RideState,
    pub total_riders: u64,
    pub queue_len:    usize,
}

impl From<&Ride> for RideSummary {
    fn from(ride: &Ride) -> Self {
        Self {
            name:         ride.name.clone(),
            kind:         ride.kind(),
            state:        ride.state(),
            total_riders: ride.total_riders(),
            queue_len:    ride.queue().len(),
        }
    }
}

/// What a finished (or paused) run produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub ticks:       u64,
    pub entered:     u64,
    pub left:        u64,
    pub remaining:   usize,
    pub total_rides: u64,
    pub rides:       Vec<RideSummary>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "SIMULATION COMPLETE")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total timesteps: {}", self.ticks)?;
        writeln!(f, "Total patrons entered: {}", self.entered)?;
        writeln!(f, "Total patrons left: {}", self.left)?;
        writeln!(f, "Patrons still in park: {}", self.remaining)?;
        writeln!(f, "Total rides taken: {}", self.total_rides)?;
        writeln!(f)?;
        write!(f, "Ride Statistics:")?;
        for ride in &self.rides {
            write!(
                f,
                "\n  {}: {} riders, queue: {}, state: {}",
                ride.name, ride.total_riders, ride.queue_len, ride.state
            )?;
        }
        Ok(())
    }
}

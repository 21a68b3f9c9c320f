//! The simulation's single random source.
//!
//! Every random decision in a run — spawn rolls, exit choice, spawn jitter,
//! patron colour, ride choice, roam destinations — draws from one `SimRng`
//! owned by the world and lent to behavior code by `&mut`.  Draws happen in
//! a fixed order (rides, then patrons in id order), so a seeded run is
//! reproducible tick for tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable simulation RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG: the same seed always produces the same run.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

//! Randomness source for row motion.

use rand::prelude::*;

/// Random number generator wrapper for move candidates.
///
/// Owned by the simulator so runs can be replayed from a fixed seed.
pub struct MotionRng {
    rng: StdRng,
}

impl MotionRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create from an optional seed, falling back to entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::new)
    }

    /// Uniform draw from `{-1, 0, +1}`.
    #[inline]
    pub fn displacement(&mut self) -> i32 {
        self.rng.gen_range(-1..=1)
    }
}

//! Damage roll source abstraction.
//!
//! Weapon damage is the only nondeterminism in the engine, so it is drawn
//! through the [`DamageRoll`] trait: the arena runs on fresh entropy in
//! production and on a seeded or fixed roller in tests and replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform damage rolls.
///
/// Implementations must return a value in `[min, max]` inclusive.
pub trait DamageRoll: Send {
    /// Draw one sample from `[min, max]`.
    fn roll(&mut self, min: f64, max: f64) -> f64;
}

/// Default roller backed by a seedable ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct SeededRoll {
    rng: ChaCha8Rng,
}

impl SeededRoll {
    /// Roller seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic roller for replays and tests.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DamageRoll for SeededRoll {
    fn roll(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Roller that always yields the same value, clamped into range.
///
/// Lets tests pin exact damage numbers.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub f64);

impl DamageRoll for FixedRoll {
    fn roll(&mut self, min: f64, max: f64) -> f64 {
        self.0.clamp(min, max)
    }
}

//! Wheel randomness.
//!
//! Entertainment-grade uniform draws, not a security primitive. The engine
//! takes any [`Wheel`] by `&mut`, so callers own seeding and tests can
//! substitute a scripted wheel.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wheelhouse_types::WHEEL_MAX;

/// Source of winning numbers. One call per resolved spin.
pub trait Wheel {
    /// Draw the next winning number, uniform in `0..=36`.
    fn spin(&mut self) -> u8;
}

/// ChaCha8-backed wheel.
#[derive(Clone, Debug)]
pub struct WheelRng {
    inner: ChaCha8Rng,
}

impl WheelRng {
    /// Wheel seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic wheel for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Wheel for WheelRng {
    fn spin(&mut self) -> u8 {
        self.inner.gen_range(0..=WHEEL_MAX)
    }
}

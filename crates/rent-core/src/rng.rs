//! Injectable sources of uniform randomness.
//!
//! The engine never reaches for a global generator.  Every random draw goes
//! through a [`UniformSource`] handed to `run`, so a test can replay an exact
//! sequence and a production run can pick its own seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult};

/// A source of uniformly distributed `f64` values in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.  The same seed always produces identical draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1).
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Used to pin the travel durations of a run in tests and what-if scenarios.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    next:  usize,
}

impl ScriptedSource {
    /// Fails if `draws` is empty or any value lies outside `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> CoreResult<Self> {
        if draws.is_empty() {
            return Err(CoreError::InvalidDraw("scripted source needs at least one draw".into()));
        }
        if let Some(bad) = draws.iter().find(|u| !(0.0..1.0).contains(*u)) {
            return Err(CoreError::InvalidDraw(format!("{bad} is outside [0, 1)")));
        }
        Ok(Self { draws, next: 0 })
    }

    /// A source that returns `u` forever.
    pub fn constant(u: f64) -> CoreResult<Self> {
        Self::new(vec![u])
    }

    /// How many values have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let u = self.draws[self.next % self.draws.len()];
        self.next += 1;
        u
    }
}

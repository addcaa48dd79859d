#![forbid(unsafe_code)]

//! Procedural target generation.
//!
//! # Algorithm
//!
//! 1. Draw the real-digit count `n` uniformly from `{2, 3, 4}`.
//! 2. Draw `n` digits uniformly from `0..=9`. For `n == 4` the fourth digit is
//!    re-drawn while it is congruent to the second mod 3.
//! 3. Build the hint: real digits on odd positions `1, 3, .., 2n - 1`, `n` on
//!    position 10, independent uniform filler digits elsewhere.
//!
//! The rejection step keeps every target solvable without reusing a point:
//! no residue class is ever needed more than three times, and each class
//! (grid column) has exactly three points.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::pattern::{MAX_REAL_DIGITS, MIN_REAL_DIGITS, TargetPattern};

/// Draws fresh [`TargetPattern`]s from a random source.
pub struct PatternGenerator<R = SmallRng> {
    rng: R,
}

impl<R> fmt::Debug for PatternGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternGenerator").finish_non_exhaustive()
    }
}

impl PatternGenerator<SmallRng> {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Deterministic generator for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for PatternGenerator<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> PatternGenerator<R> {
    /// Wrap an arbitrary random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a new target.
    pub fn generate(&mut self) -> TargetPattern {
        let n = self.rng.random_range(MIN_REAL_DIGITS..=MAX_REAL_DIGITS);
        let mut digits: SmallVec<[u8; MAX_REAL_DIGITS]> = SmallVec::new();

        while digits.len() < n {
            let digit = self.rng.random_range(0..=9u8);
            if digits.len() == 3 && digit % 3 == digits[1] % 3 {
                continue;
            }
            digits.push(digit);
        }

        let rng = &mut self.rng;
        let pattern = TargetPattern::assemble(digits, || rng.random_range(0..=9u8));
        tracing::debug!(
            real_digits = n,
            hint = pattern.display(),
            "generated target pattern"
        );
        pattern
    }

    /// Access the underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#![forbid(unsafe_code)]

//! Verification of finished gestures against the current target.
//!
//! # State Machine
//!
//! [`PatternVerifier`] owns the current [`TargetPattern`] and a failure
//! counter in `0..FAILURE_THRESHOLD`:
//!
//! - match: the counter is left alone and [`Verdict::Matched`] is returned;
//! - mismatch: the counter is incremented; on reaching the threshold the
//!   target is regenerated, the counter returns to zero and
//!   [`Verdict::Regenerated`] is returned, otherwise [`Verdict::Mismatch`].
//!
//! # Invariants
//!
//! 1. `failures() < FAILURE_THRESHOLD` between calls.
//! 2. A new target always starts with zero failures.
//! 3. Comparison is by residue mod 3, never by exact digit or label.

use std::fmt;

use rand::Rng;
use rand::rngs::SmallRng;
use smallvec::SmallVec;

use patlock_layout::PointLabel;

use crate::generator::PatternGenerator;
use crate::pattern::{MAX_REAL_DIGITS, TargetPattern};

/// Consecutive mismatches against one target before it is replaced.
pub const FAILURE_THRESHOLD: u8 = 3;

/// Visual feedback for a verified gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    /// The gesture matched the target.
    Success,
    /// The gesture did not match.
    Failure,
}

/// Outcome of verifying one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The gesture matched the current target.
    Matched,
    /// The gesture did not match; `failures` mismatches so far on this target.
    Mismatch {
        /// Failure count after this mismatch.
        failures: u8,
    },
    /// The gesture did not match and exhausted the attempts; a new target
    /// was generated.
    Regenerated,
}

impl Verdict {
    /// Whether the gesture matched.
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }

    /// Visual feedback to show for this verdict.
    #[inline]
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        if self.is_match() {
            Feedback::Success
        } else {
            Feedback::Failure
        }
    }
}

/// Whether `sequence` satisfies `target`.
///
/// Compares `digit mod 3` for each real digit with `(label - 1) mod 3` for the
/// first `n` labels of the sequence. Shorter sequences never match; labels past
/// the `n`-th are ignored.
pub fn matches(sequence: &[PointLabel], target: &TargetPattern) -> bool {
    sequence.len() >= target.len()
        && target
            .residues()
            .zip(sequence.iter().map(|label| label.residue()))
            .all(|(expected, actual)| expected == actual)
}

/// A shortest sequence of distinct labels that satisfies `target`.
///
/// Each real digit is mapped to the topmost unused point in the column of its
/// residue. Returns `None` only if a column would be needed more than three
/// times, which the fourth-digit rule rules out for every valid target.
pub fn canonical_solution(target: &TargetPattern) -> Option<SmallVec<[PointLabel; MAX_REAL_DIGITS]>> {
    let mut next_row = [0u8; 3];
    target
        .residues()
        .map(|residue| {
            let row = &mut next_row[usize::from(residue)];
            let label = PointLabel::from_cell(*row, residue)?;
            *row += 1;
            Some(label)
        })
        .collect()
}

/// Owns the current target and failure counter.
pub struct PatternVerifier<R = SmallRng> {
    generator: PatternGenerator<R>,
    target: TargetPattern,
    failures: u8,
}

impl<R> fmt::Debug for PatternVerifier<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternVerifier")
            .field("target", &self.target)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

impl<R: Rng> PatternVerifier<R> {
    /// Start a session: draw the first target from `generator`.
    pub fn new(mut generator: PatternGenerator<R>) -> Self {
        let target = generator.generate();
        Self {
            generator,
            target,
            failures: 0,
        }
    }

    /// Start a session with an explicit first target.
    pub fn with_target(generator: PatternGenerator<R>, target: TargetPattern) -> Self {
        Self {
            generator,
            target,
            failures: 0,
        }
    }

    /// Verify a finished gesture against the current target.
    pub fn verify(&mut self, sequence: &[PointLabel]) -> Verdict {
        let matched = matches(sequence, &self.target);
        tracing::debug!(
            expected = ?self.target.residues().collect::<SmallVec<[u8; MAX_REAL_DIGITS]>>(),
            actual = ?sequence.iter().map(|l| l.residue()).collect::<SmallVec<[u8; 9]>>(),
            matched,
            "verified gesture"
        );

        if matched {
            return Verdict::Matched;
        }

        self.failures += 1;
        if self.failures >= FAILURE_THRESHOLD {
            self.regenerate();
            Verdict::Regenerated
        } else {
            Verdict::Mismatch {
                failures: self.failures,
            }
        }
    }

    /// Replace the target and reset the failure counter.
    pub fn regenerate(&mut self) -> &TargetPattern {
        self.target = self.generator.generate();
        self.failures = 0;
        tracing::info!(hint = self.target.display(), "target regenerated");
        &self.target
    }

    /// The current target.
    #[inline]
    pub fn target(&self) -> &TargetPattern {
        &self.target
    }

    /// Mismatches against the current target.
    #[inline]
    pub fn failures(&self) -> u8 {
        self.failures
    }

    /// Mismatches left before the target is replaced.
    #[inline]
    pub fn remaining_attempts(&self) -> u8 {
        FAILURE_THRESHOLD - self.failures
    }
}

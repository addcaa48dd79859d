#![forbid(unsafe_code)]

//! Puzzle: target pattern generation and verification.
//!
//! # Role in patlock
//! [`PatternGenerator`] draws a [`TargetPattern`] of two to four real digits
//! and hides them among filler digits in a ten-character hint string.
//! [`PatternVerifier`] owns the current target and the failure counter, and
//! checks finished gestures against the target by residue class.
//!
//! # Matching rule
//! A visited sequence matches when, for each real digit `d` at position `i`,
//! `d mod 3 == (label_i - 1) mod 3`. Only the first `n` labels are compared;
//! many distinct paths therefore satisfy the same target.

pub mod generator;
pub mod pattern;
pub mod verifier;

pub use generator::PatternGenerator;
pub use pattern::{DISPLAY_LEN, MAX_REAL_DIGITS, MIN_REAL_DIGITS, PatternError, TargetPattern};
pub use verifier::{FAILURE_THRESHOLD, Feedback, PatternVerifier, Verdict, canonical_solution, matches};

#![forbid(unsafe_code)]

//! Widgets: gesture tracking and the pattern-lock session.
//!
//! [`gesture::GestureTracker`] turns pointer events into a visited sequence
//! and its connector segments. [`pattern_lock::PatternLock`] wires a tracker
//! to a verifier, keeps the visual state, and notifies a
//! [`pattern_lock::LockObserver`] as gestures complete.

pub mod gesture;
pub mod pattern_lock;
pub mod style;

pub use gesture::{GestureComplete, GestureTracker, TrackerState, VisitedSequence};
pub use pattern_lock::{
    LockEvent, LockObserver, PatternLock, PointState, PointVisual, SegmentVisual,
};
pub use style::{LockConfig, LockStyle, ParseRgbError, Rgb};

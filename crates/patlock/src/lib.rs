#![forbid(unsafe_code)]

//! patlock public facade.
//!
//! A 3x3 pattern lock whose target is hidden in a ten-digit hint. A drawn
//! gesture matches when each of its first `n` points lies in the grid column
//! given by the corresponding real digit mod 3.
//!
//! # Example
//!
//! ```
//! use patlock::prelude::*;
//!
//! let target = TargetPattern::from_digits(&[3, 7], || 0)?;
//! let verifier = PatternVerifier::with_target(PatternGenerator::seeded(1), target);
//! let mut lock = PatternLock::with_verifier(LockConfig::default(), verifier);
//!
//! let first = lock.layout().center(PointLabel::MIN);
//! let second = lock.layout().center(PointLabel::try_from(5u8)?);
//! let mut events: Vec<LockEvent> = Vec::new();
//! lock.handle_event(&PointerEvent::down(first.x, first.y), &mut events);
//! lock.handle_event(&PointerEvent::drag(second.x, second.y), &mut events);
//! let verdict = lock.handle_event(&PointerEvent::up(second.x, second.y), &mut events);
//!
//! assert_eq!(verdict, Some(Verdict::Matched));
//! assert!(lock.is_unlocked());
//! # Ok::<(), patlock::Error>(())
//! ```

pub mod config;
pub mod error;

pub use config::{load_config, parse_config};
pub use error::{Error, Result};

pub use patlock_core::{Point, PointerButton, PointerEvent, PointerEventKind, Rect, Segment};
pub use patlock_layout::{GridLayout, GridPoint, PointLabel};
pub use patlock_puzzle::{
    FAILURE_THRESHOLD, Feedback, PatternGenerator, PatternVerifier, TargetPattern, Verdict,
};
pub use patlock_widgets::{
    GestureTracker, LockConfig, LockEvent, LockObserver, LockStyle, PatternLock, PointState, Rgb,
};

/// Everything a host needs to embed a pattern lock.
pub mod prelude {
    pub use crate::{
        Error, Feedback, GestureTracker, GridLayout, LockConfig, LockEvent, LockObserver,
        LockStyle, PatternGenerator, PatternLock, PatternVerifier, Point, PointLabel,
        PointState, PointerEvent, Rect, Result, Rgb, TargetPattern, Verdict,
    };

    pub use crate::{core, layout, puzzle, widgets};
}

pub use patlock_core as core;
pub use patlock_layout as layout;
pub use patlock_puzzle as puzzle;
pub use patlock_widgets as widgets;

#![forbid(unsafe_code)]

//! The pattern-lock session.
//!
//! [`PatternLock`] owns one [`GestureTracker`] and one [`PatternVerifier`] and
//! is the only place the two meet: the tracker never sees the target and the
//! verifier never sees pointer positions. Hosts forward pointer events into
//! [`PatternLock::handle_event`], render from [`PatternLock::points`] and
//! [`PatternLock::segments`], and react to notifications delivered to a
//! [`LockObserver`].
//!
//! # Visual state
//!
//! - While idle or dragging, points and connectors use the idle colour.
//! - After a release, visited points and committed connectors take the
//!   feedback colour of the verdict (success or failure).
//! - The next press returns everything to the idle colour.
//!
//! Once a gesture matches, the lock is open and ignores input until
//! [`PatternLock::relock`].

use patlock_core::event::{PointerEvent, PointerEventKind};
use patlock_core::geometry::{Point, Rect, Segment};
use patlock_layout::{GridLayout, GridPoint, PointLabel};
use patlock_puzzle::{Feedback, PatternGenerator, PatternVerifier, TargetPattern, Verdict};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::gesture::{GestureTracker, VisitedSequence};
use crate::style::{LockConfig, Rgb};

/// Receives notifications from a [`PatternLock`].
///
/// All methods default to no-ops.
pub trait LockObserver {
    /// A gesture finished with `sequence`.
    fn on_gesture_complete(&mut self, _sequence: &[PointLabel]) {}

    /// The finished gesture was verified.
    fn on_visual_feedback(&mut self, _feedback: Feedback) {}

    /// Three failures replaced the target.
    fn on_target_regenerated(&mut self, _target: &TargetPattern) {}

    /// The gesture matched; the lock is open.
    fn on_unlocked(&mut self) {}
}

impl LockObserver for () {}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockEvent {
    /// See [`LockObserver::on_gesture_complete`].
    GestureComplete(VisitedSequence),
    /// See [`LockObserver::on_visual_feedback`].
    VisualFeedback(Feedback),
    /// See [`LockObserver::on_target_regenerated`]; carries the new hint.
    TargetRegenerated(String),
    /// See [`LockObserver::on_unlocked`].
    Unlocked,
}

/// Records every notification in order.
impl LockObserver for Vec<LockEvent> {
    fn on_gesture_complete(&mut self, sequence: &[PointLabel]) {
        self.push(LockEvent::GestureComplete(VisitedSequence::from_slice(
            sequence,
        )));
    }

    fn on_visual_feedback(&mut self, feedback: Feedback) {
        self.push(LockEvent::VisualFeedback(feedback));
    }

    fn on_target_regenerated(&mut self, target: &TargetPattern) {
        self.push(LockEvent::TargetRegenerated(target.display().to_owned()));
    }

    fn on_unlocked(&mut self) {
        self.push(LockEvent::Unlocked);
    }
}

/// Whether a point belongs to the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointState {
    /// Not visited.
    Idle,
    /// Visited by the current or last gesture.
    Selected,
}

/// A point ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVisual {
    /// Geometry and label.
    pub point: GridPoint,
    /// Selection state.
    pub state: PointState,
    /// Fill colour.
    pub color: Rgb,
}

/// A connector ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentVisual {
    /// Geometry.
    pub segment: Segment,
    /// Whether this is the connector following the pointer.
    pub live: bool,
    /// Stroke colour.
    pub color: Rgb,
    /// Stroke width.
    pub width: f64,
}

/// One pattern-lock session.
pub struct PatternLock<R = SmallRng> {
    config: LockConfig,
    tracker: GestureTracker,
    verifier: PatternVerifier<R>,
    feedback: Option<Feedback>,
    unlocked: bool,
}

impl<R> std::fmt::Debug for PatternLock<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternLock")
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("feedback", &self.feedback)
            .field("unlocked", &self.unlocked)
            .finish_non_exhaustive()
    }
}

impl PatternLock<SmallRng> {
    /// New session with an entropy-seeded generator.
    #[must_use]
    pub fn new(config: LockConfig) -> Self {
        Self::with_generator(config, PatternGenerator::from_entropy())
    }
}

impl<R: Rng> PatternLock<R> {
    /// New session drawing targets from `generator`.
    pub fn with_generator(config: LockConfig, generator: PatternGenerator<R>) -> Self {
        Self::with_verifier(config, PatternVerifier::new(generator))
    }

    /// New session around an existing verifier.
    pub fn with_verifier(config: LockConfig, verifier: PatternVerifier<R>) -> Self {
        let layout = GridLayout::compute(config.bounding_size, config.point_size);
        tracing::debug!(
            bounding_size = config.bounding_size,
            point_size = config.point_size,
            hint = verifier.target().display(),
            "pattern lock created"
        );
        Self {
            config,
            tracker: GestureTracker::new(layout),
            verifier,
            feedback: None,
            unlocked: false,
        }
    }

    /// Feed a pointer event.
    ///
    /// Returns the verdict when the event completed a gesture. Input is ignored
    /// while the lock is open.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        observer: &mut dyn LockObserver,
    ) -> Option<Verdict> {
        if self.unlocked {
            return None;
        }
        if event.is_primary() && matches!(event.kind, PointerEventKind::Down(_)) {
            self.feedback = None;
        }

        let done = self.tracker.handle_event(event)?;
        observer.on_gesture_complete(&done.sequence);

        let verdict = self.verifier.verify(&done.sequence);
        let feedback = verdict.feedback();
        self.feedback = Some(feedback);
        observer.on_visual_feedback(feedback);

        match verdict {
            Verdict::Matched => {
                self.unlocked = true;
                tracing::info!("pattern lock opened");
                observer.on_unlocked();
            }
            Verdict::Regenerated => observer.on_target_regenerated(self.verifier.target()),
            Verdict::Mismatch { failures } => {
                tracing::debug!(failures, "pattern rejected");
            }
        }
        Some(verdict)
    }

    /// Re-lay the grid in the largest square fitting `area`.
    ///
    /// Discards any gesture in progress and its feedback.
    pub fn resize(&mut self, area: Rect) {
        let layout = GridLayout::fit(area.width, area.height, self.config.point_size)
            .with_origin(Point::new(area.x, area.y));
        self.config.bounding_size = layout.bounding_size();
        self.tracker.set_layout(layout);
        self.feedback = None;
        tracing::debug!(bounding_size = self.config.bounding_size, "grid relaid");
    }

    /// Close the lock again with a fresh target.
    pub fn relock(&mut self) {
        self.unlocked = false;
        self.feedback = None;
        self.tracker.reset();
        self.verifier.regenerate();
    }

    /// Points with their resolved colours, in label order.
    pub fn points(&self) -> impl Iterator<Item = PointVisual> + '_ {
        self.tracker.layout().points().iter().map(|point| {
            let state = if self.tracker.is_visited(point.label) {
                PointState::Selected
            } else {
                PointState::Idle
            };
            let color = match (state, self.feedback) {
                (PointState::Selected, Some(feedback)) => self.config.style.feedback(feedback),
                _ => self.config.style.idle,
            };
            PointVisual {
                point: *point,
                state,
                color,
            }
        })
    }

    /// Connectors with their resolved colours: committed first, then live.
    pub fn segments(&self) -> impl Iterator<Item = SegmentVisual> + '_ {
        let color = self
            .feedback
            .map_or(self.config.style.idle, |f| self.config.style.feedback(f));
        let width = self.config.stroke_width();
        let committed = self
            .tracker
            .committed_segments()
            .iter()
            .map(move |segment| SegmentVisual {
                segment: *segment,
                live: false,
                color,
                width,
            });
        let live = self.tracker.live_segment().map(|segment| SegmentVisual {
            segment,
            live: true,
            color: self.config.style.idle,
            width,
        });
        committed.chain(live)
    }

    /// The hint string for the current target.
    #[inline]
    pub fn hint(&self) -> &str {
        self.verifier.target().display()
    }

    /// The current target.
    #[inline]
    pub fn target(&self) -> &TargetPattern {
        self.verifier.target()
    }

    /// Mismatches against the current target.
    #[inline]
    pub fn failures(&self) -> u8 {
        self.verifier.failures()
    }

    /// Mismatches left before the target is replaced.
    #[inline]
    pub fn remaining_attempts(&self) -> u8 {
        self.verifier.remaining_attempts()
    }

    /// Feedback of the last verified gesture, until the next press.
    #[inline]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether a gesture has matched.
    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Labels of the current or last gesture.
    #[inline]
    pub fn visited(&self) -> &[PointLabel] {
        self.tracker.visited()
    }

    /// The gesture tracker.
    #[inline]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// The current layout.
    #[inline]
    pub fn layout(&self) -> &GridLayout {
        self.tracker.layout()
    }

    /// The configuration in effect.
    #[inline]
    pub fn config(&self) -> &LockConfig {
        &self.config
    }
}

#![forbid(unsafe_code)]

//! Gesture tracking: turns pointer events into a visited point sequence.
//!
//! [`GestureTracker`] hit-tests pointer positions against a [`GridLayout`]
//! and records which points a drag passes over, together with the connector
//! segments a host draws between them.
//!
//! # State Machine
//!
//! ```text
//!            down (hit)              up
//!   Idle ─────────────────▶ Dragging ──────▶ Idle  (emits GestureComplete)
//!    │ ▲                      │  ▲
//!    │ │ up (emits empty)     │  │ move: extend sequence / follow pointer
//!    ▼ │                      └──┘
//!   Idle (armed)   ◀── down (miss)
//! ```
//!
//! A press that misses every point leaves the tracker idle but armed: moves
//! are ignored and the release still completes the gesture with an empty
//! sequence.
//!
//! # Invariants
//!
//! 1. The visited sequence never contains a label twice.
//! 2. There is exactly one committed segment per consecutive pair of visited
//!    points.
//! 3. A live segment exists only while dragging, and is anchored at the center
//!    of the most recently visited point.
//! 4. A new press discards everything from the previous gesture, without a
//!    completion for a gesture that was still in progress.

use patlock_core::event::{PointerEvent, PointerEventKind};
use patlock_core::geometry::{Point, Segment};
use patlock_layout::{GridLayout, PointLabel};
use smallvec::SmallVec;

/// Ordered labels visited by one gesture.
pub type VisitedSequence = SmallVec<[PointLabel; 9]>;

/// Tracker phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer held down after pressing on a point.
    Dragging,
}

/// A finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureComplete {
    /// Labels visited, in order. May be empty or a single tap.
    pub sequence: VisitedSequence,
}

/// Pointer-driven state machine over the nine grid points.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    layout: GridLayout,
    state: TrackerState,
    armed: bool,
    visited: VisitedSequence,
    visited_mask: u16,
    committed: SmallVec<[Segment; 8]>,
    live: Option<Segment>,
}

impl GestureTracker {
    /// Create an idle tracker over `layout`.
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            state: TrackerState::Idle,
            armed: false,
            visited: VisitedSequence::new(),
            visited_mask: 0,
            committed: SmallVec::new(),
            live: None,
        }
    }

    /// Feed a raw pointer event.
    ///
    /// Only primary-button presses, drags and releases take part; everything
    /// else is ignored. Returns the finished gesture on release.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<GestureComplete> {
        if !event.is_primary() {
            return None;
        }
        match event.kind {
            PointerEventKind::Down(_) => {
                self.pointer_down(event.position);
                None
            }
            PointerEventKind::Drag(_) => {
                self.pointer_move(event.position);
                None
            }
            PointerEventKind::Up(_) => self.pointer_up(),
            PointerEventKind::Moved => None,
        }
    }

    /// Start a gesture at `position`.
    ///
    /// Always clears the previous sequence and segments.
    pub fn pointer_down(&mut self, position: Point) {
        if self.state == TrackerState::Dragging {
            tracing::debug!(
                visited = self.visited.len(),
                "gesture abandoned by new press"
            );
        }
        self.clear();
        self.armed = true;

        let Some(point) = self.layout.hit_test(position) else {
            tracing::trace!(x = position.x, y = position.y, "press missed the grid");
            return;
        };

        self.visit(point.label);
        self.live = Some(Segment::at(point.center));
        self.state = TrackerState::Dragging;
        tracing::debug!(label = point.label.get(), "gesture started");
    }

    /// Follow the pointer to `position`.
    ///
    /// Returns `true` if a new point was appended to the sequence.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if self.state != TrackerState::Dragging {
            return false;
        }
        if let Some(live) = self.live.as_mut() {
            live.end = position;
        }
        tracing::trace!(x = position.x, y = position.y, "pointer moved");

        let Some(point) = self.layout.hit_test(position) else {
            return false;
        };
        if self.is_visited(point.label) {
            return false;
        }
        let Some(&previous) = self.visited.last() else {
            return false;
        };

        self.visit(point.label);
        self.committed
            .push(Segment::new(self.layout.center(previous), point.center));
        self.live = Some(Segment::new(point.center, position));
        tracing::debug!(
            label = point.label.get(),
            from = previous.get(),
            visited = self.visited.len(),
            "point visited"
        );
        true
    }

    /// End the gesture.
    ///
    /// Drops the live segment and returns the frozen sequence. Returns `None`
    /// when no press preceded the release.
    pub fn pointer_up(&mut self) -> Option<GestureComplete> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        self.state = TrackerState::Idle;
        self.live = None;

        tracing::debug!(
            sequence = ?self.visited.iter().map(|l| l.get()).collect::<SmallVec<[u8; 9]>>(),
            "gesture complete"
        );
        Some(GestureComplete {
            sequence: self.visited.clone(),
        })
    }

    /// Discard all gesture state.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Install a recomputed layout; any gesture in progress is discarded.
    pub fn set_layout(&mut self, layout: GridLayout) {
        self.clear();
        self.layout = layout;
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == TrackerState::Dragging
    }

    /// Labels visited by the current or last gesture.
    #[inline]
    #[must_use]
    pub fn visited(&self) -> &[PointLabel] {
        &self.visited
    }

    /// Whether `label` was visited by the current or last gesture.
    #[inline]
    #[must_use]
    pub fn is_visited(&self, label: PointLabel) -> bool {
        self.visited_mask & (1 << label.get()) != 0
    }

    /// Connectors between consecutive visited points.
    #[inline]
    #[must_use]
    pub fn committed_segments(&self) -> &[Segment] {
        &self.committed
    }

    /// The connector following the pointer, while dragging.
    #[inline]
    #[must_use]
    pub fn live_segment(&self) -> Option<Segment> {
        self.live
    }

    /// Committed segments followed by the live one, if any.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.committed.iter().copied().chain(self.live)
    }

    /// The layout hit tests run against.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    fn visit(&mut self, label: PointLabel) {
        self.visited.push(label);
        self.visited_mask |= 1 << label.get();
    }

    fn clear(&mut self) {
        self.state = TrackerState::Idle;
        self.armed = false;
        self.visited.clear();
        self.visited_mask = 0;
        self.committed.clear();
        self.live = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use patlock_core::event::PointerButton;

    // Centers at 15, 45, 75 on both axes; radius 5.
    fn tracker() -> GestureTracker {
        GestureTracker::new(GridLayout::compute(90.0, 10.0))
    }

    fn at(label: u8) -> Point {
        let l = PointLabel::new(label).unwrap();
        GridLayout::compute(90.0, 10.0).center(l)
    }

    fn labels(seq: &[PointLabel]) -> Vec<u8> {
        seq.iter().map(|l| l.get()).collect()
    }

    const GAP: Point = Point::new(30.0, 30.0);

    // --- Press ---

    #[test]
    fn press_on_point_starts_drag() {
        let mut t = tracker();
        t.pointer_down(at(5));
        assert_eq!(t.state(), TrackerState::Dragging);
        assert_eq!(labels(t.visited()), vec![5]);
        assert_eq!(t.live_segment(), Some(Segment::at(at(5))));
        assert!(t.committed_segments().is_empty());
    }

    #[test]
    fn press_off_grid_stays_idle() {
        let mut t = tracker();
        t.pointer_down(GAP);
        assert_eq!(t.state(), TrackerState::Idle);
        assert!(t.visited().is_empty());
        assert_eq!(t.live_segment(), None);
    }

    #[test]
    fn missed_press_ignores_moves_and_completes_empty() {
        let mut t = tracker();
        t.pointer_down(GAP);
        assert!(!t.pointer_move(at(1)));
        assert!(t.visited().is_empty());
        let done = t.pointer_up().unwrap();
        assert!(done.sequence.is_empty());
    }

    // --- Move ---

    #[test]
    fn move_extends_sequence_and_commits_segment() {
        let mut t = tracker();
        t.pointer_down(at(1));
        assert!(t.pointer_move(at(2)));
        assert!(t.pointer_move(at(3)));
        assert_eq!(labels(t.visited()), vec![1, 2, 3]);
        assert_eq!(
            t.committed_segments(),
            &[
                Segment::new(at(1), at(2)),
                Segment::new(at(2), at(3)),
            ]
        );
        assert_eq!(t.live_segment().map(|s| s.start), Some(at(3)));
    }

    #[test]
    fn live_segment_follows_pointer_off_points() {
        let mut t = tracker();
        t.pointer_down(at(1));
        assert!(!t.pointer_move(GAP));
        assert_eq!(t.live_segment(), Some(Segment::new(at(1), GAP)));
        assert_eq!(labels(t.visited()), vec![1]);
    }

    #[test]
    fn revisiting_a_point_is_inert() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(2));
        for _ in 0..5 {
            assert!(!t.pointer_move(at(1)));
            assert!(!t.pointer_move(at(2)));
        }
        assert_eq!(labels(t.visited()), vec![1, 2]);
        assert_eq!(t.committed_segments().len(), 1);
        // Free end still follows the pointer.
        assert_eq!(t.live_segment(), Some(Segment::new(at(2), at(2))));
        t.pointer_move(at(1).offset(1.0, 1.0));
        assert_eq!(t.live_segment().map(|s| s.end), Some(at(1).offset(1.0, 1.0)));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut t = tracker();
        assert!(!t.pointer_move(at(5)));
        assert!(t.visited().is_empty());
        assert_eq!(t.live_segment(), None);
    }

    #[test]
    fn jump_across_grid_does_not_fill_in_middle() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(9));
        assert_eq!(labels(t.visited()), vec![1, 9]);
        assert!(!t.is_visited(PointLabel::new(5).unwrap()));
    }

    // --- Release ---

    #[test]
    fn release_freezes_sequence_and_drops_live() {
        let mut t = tracker();
        t.pointer_down(at(7));
        t.pointer_move(at(5));
        t.pointer_move(at(3));
        let done = t.pointer_up().unwrap();
        assert_eq!(labels(&done.sequence), vec![7, 5, 3]);
        assert_eq!(t.state(), TrackerState::Idle);
        assert_eq!(t.live_segment(), None);
        assert_eq!(t.committed_segments().len(), 2);
        assert_eq!(labels(t.visited()), vec![7, 5, 3]);

        // Frozen: moves after release change nothing.
        t.pointer_move(at(1));
        assert_eq!(labels(t.visited()), vec![7, 5, 3]);
    }

    #[test]
    fn single_tap_is_one_element_gesture() {
        let mut t = tracker();
        t.pointer_down(at(4));
        let done = t.pointer_up().unwrap();
        assert_eq!(labels(&done.sequence), vec![4]);
        assert!(t.committed_segments().is_empty());
    }

    #[test]
    fn release_without_press_emits_nothing() {
        let mut t = tracker();
        assert_eq!(t.pointer_up(), None);
        t.pointer_down(at(1));
        assert!(t.pointer_up().is_some());
        assert_eq!(t.pointer_up(), None);
    }

    // --- Abandonment ---

    #[test]
    fn press_while_dragging_restarts() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(2));
        t.pointer_down(at(9));
        assert_eq!(labels(t.visited()), vec![9]);
        assert!(t.committed_segments().is_empty());
        let done = t.pointer_up().unwrap();
        assert_eq!(labels(&done.sequence), vec![9]);
    }

    #[test]
    fn new_press_clears_previous_gesture() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(2));
        t.pointer_up();
        t.pointer_down(at(2));
        assert_eq!(labels(t.visited()), vec![2]);
        assert!(t.committed_segments().is_empty());
    }

    // --- Events ---

    #[test]
    fn handle_event_routes_primary_button() {
        let mut t = tracker();
        let c1 = at(1);
        let c6 = at(6);
        assert_eq!(t.handle_event(&PointerEvent::down(c1.x, c1.y)), None);
        assert_eq!(t.handle_event(&PointerEvent::drag(c6.x, c6.y)), None);
        let done = t.handle_event(&PointerEvent::up(c6.x, c6.y)).unwrap();
        assert_eq!(labels(&done.sequence), vec![1, 6]);
    }

    #[test]
    fn handle_event_ignores_other_buttons() {
        let mut t = tracker();
        let c1 = at(1);
        let ev = PointerEvent::new(PointerEventKind::Down(PointerButton::Secondary), c1);
        assert_eq!(t.handle_event(&ev), None);
        assert!(t.visited().is_empty());
        let hover = PointerEvent::new(PointerEventKind::Moved, c1);
        assert_eq!(t.handle_event(&hover), None);
    }

    // --- Layout ---

    #[test]
    fn set_layout_discards_gesture() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(2));
        t.set_layout(GridLayout::compute(300.0, 20.0));
        assert_eq!(t.state(), TrackerState::Idle);
        assert!(t.visited().is_empty());
        assert_eq!(t.pointer_up(), None);
        assert_eq!(t.layout().bounding_size(), 300.0);
    }

    #[test]
    fn segments_chain_committed_then_live() {
        let mut t = tracker();
        t.pointer_down(at(1));
        t.pointer_move(at(5));
        t.pointer_move(GAP);
        let segments: Vec<Segment> = t.segments().collect();
        assert_eq!(
            segments,
            vec![Segment::new(at(1), at(5)), Segment::new(at(5), GAP)]
        );
        t.reset();
        assert_eq!(t.segments().count(), 0);
    }
}

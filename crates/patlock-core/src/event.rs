#![forbid(unsafe_code)]

//! Canonical pointer events.
//!
//! Hosts normalize backend input (terminal mouse reports, window-system
//! pointer callbacks, touch) into [`PointerEvent`] before handing it to the
//! widget. Only the primary button drives a gesture; the other kinds exist so
//! hosts can forward their streams unfiltered.

use crate::geometry::Point;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// Primary button (left mouse button, single touch contact).
    #[default]
    Primary,
    /// Secondary button (right mouse button).
    Secondary,
    /// Middle button.
    Middle,
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventKind {
    /// Button pressed.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved while a button is held.
    Drag(PointerButton),
    /// Pointer moved with no button held.
    Moved,
}

impl PointerEventKind {
    /// The button involved, if any.
    #[must_use]
    pub const fn button(self) -> Option<PointerButton> {
        match self {
            Self::Down(b) | Self::Up(b) | Self::Drag(b) => Some(b),
            Self::Moved => None,
        }
    }
}

/// A pointer event at a position in layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,
    /// Where it happened.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Primary-button press at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(
            PointerEventKind::Down(PointerButton::Primary),
            Point::new(x, y),
        )
    }

    /// Primary-button drag to `(x, y)`.
    #[must_use]
    pub const fn drag(x: f64, y: f64) -> Self {
        Self::new(
            PointerEventKind::Drag(PointerButton::Primary),
            Point::new(x, y),
        )
    }

    /// Primary-button release at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(
            PointerEventKind::Up(PointerButton::Primary),
            Point::new(x, y),
        )
    }

    /// Whether this event involves the primary button.
    #[inline]
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.kind.button() == Some(PointerButton::Primary)
    }
}

#![forbid(unsafe_code)]

//! Core: geometry primitives and normalized pointer events.
//!
//! # Role in patlock
//! `patlock-core` is the input layer. Hosts translate whatever their windowing
//! or terminal backend reports into [`event::PointerEvent`] values, and every
//! higher crate works in the continuous coordinate space of [`geometry`].
//!
//! # How it fits in the system
//! The grid layout (`patlock-layout`) places points in this coordinate space,
//! the gesture tracker (`patlock-widgets`) consumes pointer events against that
//! layout, and the puzzle crate never sees coordinates at all.

pub mod event;
pub mod geometry;

pub use event::{PointerButton, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect, Segment};

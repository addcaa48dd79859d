#![forbid(unsafe_code)]

//! Layout for the nine-point lock grid.
//!
//! [`GridLayout`] places the nine [`GridPoint`]s of a 3×3 grid inside a square
//! bounding box and answers hit tests against them. Points are identified
//! everywhere else by their [`PointLabel`].

pub mod grid;
pub mod label;

pub use grid::{GRID_DIM, GridLayout, GridPoint};
pub use label::{InvalidLabel, PointLabel};
pub use patlock_core::geometry::{Point, Rect};

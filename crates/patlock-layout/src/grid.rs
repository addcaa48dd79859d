#![forbid(unsafe_code)]

//! Grid layout: the nine point positions for a bounding square.
//!
//! The bounding square is split into a 3×3 array of cells of side
//! `bounding_size / 3`, and a point of diameter `point_size` is centered in
//! each cell. The layout is a pure function of its inputs; a resize builds a
//! new [`GridLayout`] and the previous one is discarded as a whole.
//!
//! # Invariants
//!
//! 1. A layout always holds exactly nine points, labelled `1..=9` row-major.
//! 2. When `point_size <= bounding_size / 3` the point discs are pairwise
//!    disjoint, so [`GridLayout::hit_test`] is unambiguous.
//! 3. Degenerate inputs (zero or negative sizes) are accepted and yield
//!    coincident or empty points; avoiding them is the caller's concern.

use patlock_core::geometry::{Point, Rect};

use crate::label::PointLabel;

/// Points per grid side.
pub const GRID_DIM: usize = 3;

/// A selectable point of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Identity of the point.
    pub label: PointLabel,
    /// Center in layout space.
    pub center: Point,
    /// Diameter of the point's disc.
    pub size: f64,
}

impl GridPoint {
    /// Radius of the point's disc.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// Bounding box of the disc.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.center, self.size)
    }

    /// Whether `position` lies on the point's disc (boundary included).
    #[inline]
    pub fn contains(&self, position: Point) -> bool {
        let r = self.radius();
        self.center.distance_squared(position) <= r * r
    }
}

/// Positions of the nine grid points.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    origin: Point,
    bounding_size: f64,
    point_size: f64,
    points: [GridPoint; GRID_DIM * GRID_DIM],
}

impl GridLayout {
    /// Lay out the grid in a square of side `bounding_size` at the origin.
    pub fn compute(bounding_size: f64, point_size: f64) -> Self {
        let distance = bounding_size / GRID_DIM as f64;
        let left = (distance - point_size) / 2.0;
        let half = point_size / 2.0;

        let points = std::array::from_fn(|index| {
            let row = index / GRID_DIM;
            let column = index % GRID_DIM;
            let x = column as f64 * distance + left;
            let y = row as f64 * distance + left;
            GridPoint {
                label: PointLabel::from_cell(row as u8, column as u8)
                    .unwrap_or(PointLabel::MIN),
                center: Point::new(x + half, y + half),
                size: point_size,
            }
        });

        Self {
            origin: Point::ORIGIN,
            bounding_size,
            point_size,
            points,
        }
    }

    /// Lay out the grid in the largest square that fits `width × height`.
    pub fn fit(width: f64, height: f64, point_size: f64) -> Self {
        Self::compute(width.min(height), point_size)
    }

    /// Move the grid so its top-left corner sits at `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        let dx = origin.x - self.origin.x;
        let dy = origin.y - self.origin.y;
        for point in &mut self.points {
            point.center = point.center.offset(dx, dy);
        }
        self.origin = origin;
        self
    }

    /// The point whose disc contains `position`, if any.
    ///
    /// If overlapping discs were configured the lowest label wins.
    pub fn hit_test(&self, position: Point) -> Option<GridPoint> {
        self.points.iter().copied().find(|p| p.contains(position))
    }

    /// The point with the given label.
    #[inline]
    pub fn point(&self, label: PointLabel) -> GridPoint {
        self.points[label.index()]
    }

    /// Center of the point with the given label.
    #[inline]
    pub fn center(&self, label: PointLabel) -> Point {
        self.point(label).center
    }

    /// All nine points in label order.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Side of the bounding square.
    #[inline]
    pub fn bounding_size(&self) -> f64 {
        self.bounding_size
    }

    /// Diameter of each point.
    #[inline]
    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    /// Side of one grid cell.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.bounding_size / GRID_DIM as f64
    }

    /// The bounding square in layout space.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.bounding_size,
            self.bounding_size,
        )
    }
}

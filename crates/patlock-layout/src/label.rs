#![forbid(unsafe_code)]

//! Grid point labels.

use std::fmt;

/// Identity of a grid point: `1..=9`, row-major, top-left is `1`.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PointLabel(u8);

impl PointLabel {
    /// Smallest label.
    pub const MIN: Self = Self(1);
    /// Largest label.
    pub const MAX: Self = Self(9);

    /// Create a label, returning `None` outside `1..=9`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Label of the point at `row`/`column` (both zero-based, `< 3`).
    #[inline]
    #[must_use]
    pub const fn from_cell(row: u8, column: u8) -> Option<Self> {
        if row < 3 && column < 3 {
            Some(Self(row * 3 + column + 1))
        } else {
            None
        }
    }

    /// All nine labels in row-major order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (1..=9).map(Self)
    }

    /// Raw label value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based row-major index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Zero-based row.
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.0 - 1) / 3
    }

    /// Zero-based column.
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        (self.0 - 1) % 3
    }

    /// Residue class used by pattern verification: `(label - 1) mod 3`.
    ///
    /// This is the column, so every label in a column shares a residue.
    #[inline]
    #[must_use]
    pub const fn residue(self) -> u8 {
        self.column()
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PointLabel {
    type Error = InvalidLabel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidLabel(value))
    }
}

impl From<PointLabel> for u8 {
    fn from(label: PointLabel) -> Self {
        label.0
    }
}

/// A value outside `1..=9` was used as a [`PointLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLabel(pub u8);

impl fmt::Display for InvalidLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid label {} is outside 1..=9", self.0)
    }
}

impl std::error::Error for InvalidLabel {}

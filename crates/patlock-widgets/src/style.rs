#![forbid(unsafe_code)]

//! Colours and configuration for the pattern-lock widget.
//!
//! Everything here is plain data supplied by the host. With the `serde`
//! feature the types derive `Serialize`/`Deserialize` so a host can keep
//! them in whatever configuration format it already reads; the widget itself
//! never touches the filesystem.

use std::fmt;
use std::str::FromStr;

use patlock_puzzle::Feedback;

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Create a colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Green, `#008000`.
    pub const GREEN: Self = Self::new(0x00, 0x80, 0x00);
    /// Red, `#ff0000`.
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Neutral grey.
    pub const GREY: Self = Self::new(0xA0, 0xA0, 0xA0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A colour string was not `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour {:?}, expected #rrggbb", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Colours for points and connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LockStyle {
    /// Untouched points, and the trail while dragging.
    pub idle: Rgb,
    /// Visited points and connectors after a matching gesture.
    pub success: Rgb,
    /// Visited points and connectors after a failed gesture.
    pub failure: Rgb,
}

impl Default for LockStyle {
    fn default() -> Self {
        Self {
            idle: Rgb::GREY,
            success: Rgb::GREEN,
            failure: Rgb::RED,
        }
    }
}

impl LockStyle {
    /// Colour for the given feedback.
    #[inline]
    pub const fn feedback(&self, feedback: Feedback) -> Rgb {
        match feedback {
            Feedback::Success => self.success,
            Feedback::Failure => self.failure,
        }
    }
}

/// Widget configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LockConfig {
    /// Side of the square the grid is laid out in.
    pub bounding_size: f64,
    /// Diameter of each point.
    pub point_size: f64,
    /// Colours.
    pub style: LockStyle,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            bounding_size: 300.0,
            point_size: 15.0,
            style: LockStyle::default(),
        }
    }
}

impl LockConfig {
    /// Width of connector strokes: half a point diameter.
    #[inline]
    pub fn stroke_width(&self) -> f64 {
        self.point_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trips_through_hex() {
        let c: Rgb = "#1a2B3c".parse().unwrap();
        assert_eq!(c, Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(c.to_string(), "#1a2b3c");
    }

    #[test]
    fn rgb_rejects_malformed() {
        assert!("1a2b3c".parse::<Rgb>().is_err());
        assert!("#1a2b3".parse::<Rgb>().is_err());
        assert!("#zz0000".parse::<Rgb>().is_err());
        assert!("#ÿÿÿ".parse::<Rgb>().is_err());
    }

    #[test]
    fn style_resolves_feedback() {
        let style = LockStyle::default();
        assert_eq!(style.feedback(Feedback::Success), Rgb::GREEN);
        assert_eq!(style.feedback(Feedback::Failure), Rgb::RED);
    }
}

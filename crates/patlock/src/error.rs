#![forbid(unsafe_code)]

//! patlock error model.
//!
//! Tracking and verification never fail; errors only arise when a value is
//! built from untrusted input (digits, labels, colours, configuration files)
//! or when a host hits I/O trouble. Each source keeps its own typed error and
//! [`Error`] wraps them so hosts can use `?` throughout.

use std::fmt;

use patlock_layout::InvalidLabel;
use patlock_puzzle::PatternError;
use patlock_widgets::ParseRgbError;

/// Top-level error for patlock hosts.
#[derive(Debug)]
pub enum Error {
    /// Digits did not form a valid target.
    Pattern(PatternError),
    /// A number outside `1..=9` was used as a point label.
    Label(InvalidLabel),
    /// A colour string was malformed.
    Colour(ParseRgbError),
    /// A configuration document could not be parsed.
    Config(serde_json::Error),
    /// A configuration value was out of range.
    InvalidConfig(String),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for patlock APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "pattern: {err}"),
            Self::Label(err) => write!(f, "{err}"),
            Self::Colour(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::InvalidConfig(msg) => write!(f, "config: {msg}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::Label(err) => Some(err),
            Self::Colour(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::InvalidConfig(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

impl From<InvalidLabel> for Error {
    fn from(err: InvalidLabel) -> Self {
        Self::Label(err)
    }
}

impl From<ParseRgbError> for Error {
    fn from(err: ParseRgbError) -> Self {
        Self::Colour(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

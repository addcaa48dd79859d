#![forbid(unsafe_code)]

//! Target patterns and their hint strings.

use std::fmt;

use smallvec::SmallVec;

/// Fewest real digits in a target.
pub const MIN_REAL_DIGITS: usize = 2;
/// Most real digits in a target.
pub const MAX_REAL_DIGITS: usize = 4;
/// Length of the hint string shown to the player.
pub const DISPLAY_LEN: usize = 10;

/// Why a digit sequence is not a valid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Fewer than two or more than four real digits.
    Length(usize),
    /// A digit above 9.
    Digit {
        /// Zero-based position of the digit.
        index: usize,
        /// Offending value.
        value: u8,
    },
    /// The fourth digit shares the second digit's residue mod 3.
    CongruentFourth {
        /// Second real digit.
        second: u8,
        /// Fourth real digit.
        fourth: u8,
    },
    /// A hint string that is not ten ASCII digits long.
    HintLength(usize),
    /// A hint string that disagrees with the real digits at a position.
    HintMismatch {
        /// One-based position in the hint.
        position: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(
                f,
                "target needs {MIN_REAL_DIGITS}..={MAX_REAL_DIGITS} real digits, got {len}"
            ),
            Self::Digit { index, value } => {
                write!(f, "real digit {index} is {value}, expected 0..=9")
            }
            Self::CongruentFourth { second, fourth } => write!(
                f,
                "fourth digit {fourth} is congruent to second digit {second} mod 3"
            ),
            Self::HintLength(len) => {
                write!(f, "hint must be {DISPLAY_LEN} ASCII digits, got {len} bytes")
            }
            Self::HintMismatch { position } => {
                write!(f, "hint position {position} does not match the real digits")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A target pattern: the real digits plus the hint string that hides them.
///
/// The hint carries real digit `k` at (one-based) position `2k - 1`, the digit
/// count at position 10, and filler digits everywhere else. Patterns are
/// replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTargetPattern")
)]
pub struct TargetPattern {
    digits: SmallVec<[u8; MAX_REAL_DIGITS]>,
    display: String,
}

impl TargetPattern {
    /// Build a target from explicit real digits.
    ///
    /// `filler` supplies the noise digits of the hint string (reduced mod 10).
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the digit count is outside `2..=4`, a digit
    /// exceeds 9, or a fourth digit is congruent to the second mod 3.
    pub fn from_digits(digits: &[u8], filler: impl FnMut() -> u8) -> Result<Self, PatternError> {
        validate_digits(digits)?;
        Ok(Self::assemble(SmallVec::from_slice(digits), filler))
    }

    /// Rebuild a target from its real digits and a previously shown hint.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the digits are invalid (as for
    /// [`TargetPattern::from_digits`]) or the hint is not ten ASCII digits
    /// carrying those digits on its odd positions and their count last.
    pub fn from_parts(digits: &[u8], display: &str) -> Result<Self, PatternError> {
        validate_digits(digits)?;
        let bytes = display.as_bytes();
        if bytes.len() != DISPLAY_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(PatternError::HintLength(bytes.len()));
        }
        let n = digits.len();
        for (k, digit) in digits.iter().enumerate() {
            if bytes[2 * k] - b'0' != *digit {
                return Err(PatternError::HintMismatch { position: 2 * k + 1 });
            }
        }
        if usize::from(bytes[DISPLAY_LEN - 1] - b'0') != n {
            return Err(PatternError::HintMismatch {
                position: DISPLAY_LEN,
            });
        }
        Ok(Self {
            digits: SmallVec::from_slice(digits),
            display: display.to_owned(),
        })
    }

    /// Assemble a target from already-validated digits.
    pub(crate) fn assemble(
        digits: SmallVec<[u8; MAX_REAL_DIGITS]>,
        mut filler: impl FnMut() -> u8,
    ) -> Self {
        let n = digits.len();
        let display = (1..=DISPLAY_LEN)
            .map(|position| {
                let value = if position % 2 == 1 && position.div_ceil(2) <= n {
                    digits[position / 2]
                } else if position == DISPLAY_LEN {
                    n as u8
                } else {
                    filler() % 10
                };
                char::from(b'0' + value)
            })
            .collect();
        Self { digits, display }
    }

    /// The real digits, in order.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of real digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a target has at least two real digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Residue (mod 3) of each real digit.
    pub fn residues(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().map(|d| d % 3)
    }

    /// The ten-character hint string.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }
}

fn validate_digits(digits: &[u8]) -> Result<(), PatternError> {
    if !(MIN_REAL_DIGITS..=MAX_REAL_DIGITS).contains(&digits.len()) {
        return Err(PatternError::Length(digits.len()));
    }
    if let Some((index, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
        return Err(PatternError::Digit { index, value });
    }
    if let [_, second, _, fourth] = *digits
        && second % 3 == fourth % 3
    {
        return Err(PatternError::CongruentFourth { second, fourth });
    }
    Ok(())
}

/// Unchecked wire form; every deserialized target passes through
/// [`TargetPattern::from_parts`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTargetPattern {
    digits: Vec<u8>,
    display: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTargetPattern> for TargetPattern {
    type Error = PatternError;

    fn try_from(raw: RawTargetPattern) -> Result<Self, Self::Error> {
        Self::from_parts(&raw.digits, &raw.display)
    }
}

impl fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

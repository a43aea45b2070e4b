//! Invalid format pattern.

use core::fmt;

/// The format pattern was not valid.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPattern {
    /// A `p` pad modifier was not followed by a pattern letter.
    PadWithoutTarget {
        /// The byte index of the modifier.
        index: usize,
    },
    /// An `f` fraction modifier was not followed by a letter that can host a fraction.
    FractionWithoutTarget {
        /// The byte index of the modifier or of the offending letter.
        index: usize,
    },
    /// A quoted literal was never closed.
    UnterminatedLiteral {
        /// The byte index of the opening quote.
        index: usize,
    },
    /// A `]` had no matching `[`.
    UnmatchedClosingBracket {
        /// The byte index of the bracket.
        index: usize,
    },
    /// A letter was repeated more often than its element permits.
    InvalidCount {
        /// The pattern letter.
        letter: char,
        /// The length of the run.
        count: usize,
        /// The byte index at which the run starts.
        index: usize,
    },
    /// The pattern needs a zone registry, but none was supplied.
    NoZoneRegistry {
        /// The byte index of the zone letter.
        index: usize,
    },
}

impl fmt::Display for InvalidPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PadWithoutTarget { index } => {
                write!(f, "pad letter 'p' at index {index} must be followed by a pattern letter")
            }
            Self::FractionWithoutTarget { index } => write!(
                f,
                "fraction letter 'f' must be followed by one of 'H', 'K', 'm', 's', 'S' or 'n' \
                 (at index {index})"
            ),
            Self::UnterminatedLiteral { index } => {
                write!(f, "the string literal opened at index {index} is never closed")
            }
            Self::UnmatchedClosingBracket { index } => {
                write!(f, "']' at index {index} has no matching '['")
            }
            Self::InvalidCount {
                letter,
                count,
                index,
            } => write!(
                f,
                "a run of {count} '{letter}' letters at index {index} is too long"
            ),
            Self::NoZoneRegistry { index } => write!(
                f,
                "the zone letter at index {index} requires a zone registry"
            ),
        }
    }
}

impl From<InvalidPattern> for crate::error::Error {
    #[inline]
    fn from(original: InvalidPattern) -> Self {
        Self::InvalidPattern(original)
    }
}

impl std::error::Error for InvalidPattern {}

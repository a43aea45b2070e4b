//! Error parsing an input string.

use core::fmt;

/// An error that occurred while parsing.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// The input did not match the formatter's elements.
    UnexpectedText {
        /// The byte index at which the first mismatch was declared.
        index: usize,
    },
    /// The formatter was built without a parser for every position.
    NotParseable,
}

impl Parse {
    /// The byte index of the mismatch, if the input itself was at fault.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::UnexpectedText { index } => Some(index),
            Self::NotParseable => None,
        }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedText { index } => {
                write!(f, "the input could not be parsed at index {index}")
            }
            Self::NotParseable => f.write_str("the formatter cannot parse"),
        }
    }
}

impl From<Parse> for crate::error::Error {
    #[inline]
    fn from(original: Parse) -> Self {
        Self::Parse(original)
    }
}

impl std::error::Error for Parse {}

//! Various error types returned by methods in the crate.

mod field_range;
mod invalid_pattern;
mod parse;
mod print;

use core::fmt;

pub use field_range::FieldRange;
pub use invalid_pattern::InvalidPattern;
pub use parse::Parse;
pub use print::Print;

/// A unified error type for anything returned by a method in this crate.
///
/// This can be used when you either don't know or don't care about the exact error returned.
/// `Result<_, chronofmt::error::Error>` will work in these situations.
#[allow(missing_copy_implementations, variant_size_differences)]
#[allow(clippy::missing_docs_in_private_items)] // variants only
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FieldRange(FieldRange),
    Print(Print),
    Parse(Parse),
    InvalidPattern(InvalidPattern),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldRange(e) => e.fmt(f),
            Self::Print(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::InvalidPattern(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FieldRange(err) => Some(err),
            Self::Print(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidPattern(err) => Some(err),
        }
    }
}

//! Error printing a value.

use core::fmt;

use crate::error::FieldRange;

/// An error that occurred while printing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Print {
    /// The source could not supply a value for the named field.
    FieldUnavailable {
        /// Name of the field.
        name: Box<str>,
    },
    /// A value has more digits than the element's maximum width allows.
    ExceedsWidth {
        /// Name of the field.
        name: Box<str>,
        /// The value that was printed.
        value: i64,
        /// The element's maximum width.
        max_width: u8,
    },
    /// A negative value reached an element that cannot emit a sign.
    NegativeNotAllowed {
        /// Name of the field.
        name: Box<str>,
        /// The value that was printed.
        value: i64,
    },
    /// A padded element produced more output than its pad width.
    ExceedsPadWidth {
        /// The pad width.
        width: u8,
    },
    /// A value was outside its field's permitted range.
    FieldRange(FieldRange),
    /// The formatter was built without a printer for every position.
    NotPrintable,
    /// A localized pattern could not be resolved or compiled for the locale.
    Localized,
}

impl fmt::Display for Print {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldUnavailable { name } => {
                write!(f, "no value is available for {name}")
            }
            Self::ExceedsWidth {
                name,
                value,
                max_width,
            } => write!(
                f,
                "value {value} of {name} exceeds the maximum print width of {max_width}"
            ),
            Self::NegativeNotAllowed { name, value } => {
                write!(f, "value {value} of {name} cannot be negative")
            }
            Self::ExceedsPadWidth { width } => {
                write!(f, "output exceeds the pad width of {width}")
            }
            Self::FieldRange(e) => e.fmt(f),
            Self::NotPrintable => f.write_str("the formatter cannot print"),
            Self::Localized => f.write_str("no localized pattern is available for the locale"),
        }
    }
}

impl From<FieldRange> for Print {
    #[inline]
    fn from(original: FieldRange) -> Self {
        Self::FieldRange(original)
    }
}

impl From<Print> for crate::error::Error {
    #[inline]
    fn from(original: Print) -> Self {
        Self::Print(original)
    }
}

impl std::error::Error for Print {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FieldRange(err) => Some(err),
            _ => None,
        }
    }
}

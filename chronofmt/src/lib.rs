//! A composable date-time formatting and parsing engine.
//!
//! Formatters are assembled by a [`FormatterBuilder`], element by element or from a pattern
//! string, and are immutable and freely shareable once built. The engine knows nothing about any
//! concrete calendar: values are read through the [`Calendrical`] trait, fields are described by
//! [`FieldRule`] meta-objects, and zones and locale data arrive through equally narrow
//! interfaces. This keeps the hard parts — adjacent-value parsing, optional-section rollback,
//! strict and lenient modes, localized digits — in one place, reusable by any calendar system.
//!
//! # Example
//!
//! ```rust
//! use chronofmt::{Calendrical, FieldRef, FieldRule, FormatterBuilder, Locale};
//!
//! struct Year;
//!
//! impl FieldRule for Year {
//!     fn chronology(&self) -> &str {
//!         "ISO"
//!     }
//!     fn name(&self) -> &str {
//!         "Year"
//!     }
//!     fn min_value(&self) -> i64 {
//!         1
//!     }
//!     fn max_value(&self) -> i64 {
//!         9_999
//!     }
//! }
//!
//! struct Date {
//!     year: i64,
//! }
//!
//! impl Calendrical for Date {
//!     fn value_of(&self, field: &FieldRef) -> Option<i64> {
//!         (field.name() == "Year").then_some(self.year)
//!     }
//! }
//!
//! # fn main() -> Result<(), chronofmt::error::Error> {
//! let year = FieldRef::new(Year);
//! let mut builder = FormatterBuilder::new();
//! builder.append_value_fixed(year.clone(), 4);
//! let formatter = builder.into_formatter(Locale::ROOT);
//!
//! assert_eq!(formatter.format(&Date { year: 2009 })?, "2009");
//! assert_eq!(formatter.parse("2009")?.value_of(&year), Some(2009));
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing model
//!
//! Parsing is a single left-to-right pass over the input. Elements communicate failure in-band
//! through their returned position rather than through errors, which lets optional sections roll
//! the parse context back and continue at no cost. The result of a parse is a [`Parsed`] map of
//! field values; resolving those values into an actual date or time belongs to the calendar
//! layer, not to this crate.

pub mod error;

mod chronology;
mod field;
mod format;
mod fraction;
mod locale;
mod symbols;
mod text;
mod zone;

pub use crate::chronology::{Chronology, FormatStyle};
pub use crate::field::{offset_seconds, Calendrical, FieldRef, FieldRule};
pub use crate::format::{
    DateTimeParser, DateTimePrinter, Formatter, FormatterBuilder, ParseContext, ParseResult,
    Parsed, PatternLetters, SignStyle,
};
pub use crate::fraction::Fraction;
pub use crate::locale::Locale;
pub use crate::symbols::FormatSymbols;
pub use crate::text::{TextMatch, TextStore, TextStyle};
pub use crate::zone::{Zone, ZoneRegistry};

//! Assembling formatters and running them.

mod builder;
mod context;
mod element;
mod pattern;

use core::fmt;

pub use self::builder::FormatterBuilder;
pub use self::context::ParseContext;
use self::element::Composite;
pub use self::element::{DateTimeParser, DateTimePrinter, ParseResult, SignStyle};
pub use self::pattern::PatternLetters;
use crate::error::{InvalidPattern, Parse, Print};
use crate::field::{Calendrical, FieldRef};
use crate::locale::Locale;
use crate::symbols::FormatSymbols;

/// An immutable, shareable formatter: a pipeline of printer/parser elements bound to a locale.
///
/// Formatters are created by [`FormatterBuilder`] and may be freely shared between threads;
/// cloning is cheap because the pipeline itself is reference counted.
#[derive(Clone)]
pub struct Formatter {
    /// The locale whose symbols printing and parsing use.
    locale: Locale,
    /// The element pipeline.
    composite: Composite,
}

impl Formatter {
    /// Create a formatter over a completed composite.
    pub(crate) fn new(locale: Locale, composite: Composite) -> Self {
        Self { locale, composite }
    }

    /// Compile a pattern into a formatter in one step.
    pub fn of_pattern(
        pattern: &str,
        letters: &PatternLetters,
        locale: Locale,
    ) -> Result<Self, InvalidPattern> {
        let mut builder = FormatterBuilder::new();
        builder.append_pattern(pattern, letters)?;
        Ok(builder.into_formatter(locale))
    }

    /// The locale this formatter prints and parses with.
    #[inline]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// This formatter with a different locale, sharing the pipeline.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            composite: self.composite.clone(),
        }
    }

    /// The element pipeline, for inlining into another builder.
    pub(crate) fn composite(&self) -> &Composite {
        &self.composite
    }

    /// Whether this formatter can print.
    pub fn is_printer(&self) -> bool {
        self.composite.is_printable()
    }

    /// Whether this formatter can parse.
    pub fn is_parser(&self) -> bool {
        self.composite.is_parseable()
    }

    /// Print `source` to a new string.
    pub fn format(&self, source: &dyn Calendrical) -> Result<String, Print> {
        let mut output = String::new();
        self.format_into(source, &mut output)?;
        Ok(output)
    }

    /// Print `source`, appending to `output`. Nothing is appended when an error is returned.
    pub fn format_into(&self, source: &dyn Calendrical, output: &mut String) -> Result<(), Print> {
        if !self.composite.is_printable() {
            return Err(Print::NotPrintable);
        }
        let symbols = FormatSymbols::of(&self.locale);
        let mut buffer = String::new();
        self.composite.print(source, &mut buffer, &symbols)?;
        output.push_str(&buffer);
        Ok(())
    }

    /// Parse the whole of `text` from its start.
    ///
    /// Parsing stops at the last element; trailing input is not an error and shows up as a final
    /// [`position`](Parsed::position) short of the input's length.
    pub fn parse(&self, text: &str) -> Result<Parsed, Parse> {
        self.parse_at(text, 0)
    }

    /// Parse `text` starting at a byte position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is beyond the end of `text` or not on a character boundary.
    pub fn parse_at(&self, text: &str, position: usize) -> Result<Parsed, Parse> {
        assert!(
            position <= text.len() && text.is_char_boundary(position),
            "the parse position must lie on a character boundary within the input",
        );
        if !self.composite.is_parseable() {
            return Err(Parse::NotParseable);
        }
        let symbols = FormatSymbols::of(&self.locale);
        let mut context = ParseContext::new(&symbols);
        match self.composite.parse(&mut context, text, position) {
            Ok(end) => {
                let (values, zone) = context.into_results();
                Ok(Parsed {
                    values,
                    zone,
                    position: end,
                })
            }
            Err(index) => Err(Parse::UnexpectedText { index }),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Everything one parse call produced: the field values, the zone, and the final position.
///
/// `Parsed` implements [`Calendrical`], so parsed output can be printed straight back through a
/// formatter. Interpreting the values as an actual date or time is a calendar concern and happens
/// outside the engine.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// The parsed field values.
    values: Vec<(FieldRef, i64)>,
    /// The parsed zone identifier, if a zone element matched.
    zone: Option<Box<str>>,
    /// The byte position after the last consumed input.
    position: usize,
}

impl Parsed {
    /// The value parsed for a field, if one was recorded.
    pub fn value_of(&self, field: &FieldRef) -> Option<i64> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == field)
            .map(|(_, value)| *value)
    }

    /// The parsed zone identifier, if a zone element matched.
    #[inline]
    pub fn zone_id(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// The byte position after the last consumed input.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The number of fields that were parsed.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields were parsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The parsed fields and their values, in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldRef, i64)> {
        self.values.iter().map(|(field, value)| (field, *value))
    }
}

impl Calendrical for Parsed {
    fn value_of(&self, field: &FieldRef) -> Option<i64> {
        Parsed::value_of(self, field)
    }

    fn zone_id(&self) -> Option<String> {
        self.zone.as_deref().map(str::to_owned)
    }
}

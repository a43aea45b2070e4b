//! The closed family of printer/parser elements a formatter is assembled from.

pub(crate) mod composite;
mod fraction;
mod literal;
mod localized;
mod number;
mod offset;
mod pad;
mod settings;
mod text;
mod zone;

use std::sync::Arc;

pub(crate) use self::composite::Composite;
pub(crate) use self::fraction::FractionElement;
pub(crate) use self::literal::{CharLiteralElement, StrLiteralElement};
pub(crate) use self::localized::LocalizedElement;
pub(crate) use self::number::{NumberElement, ReducedElement};
pub(crate) use self::offset::OffsetElement;
pub(crate) use self::pad::PadElement;
pub(crate) use self::settings::SettingsElement;
pub(crate) use self::text::TextElement;
pub(crate) use self::zone::ZoneElement;
use crate::error::Print;
use crate::field::Calendrical;
use crate::format::context::ParseContext;
use crate::symbols::FormatSymbols;

/// The outcome of one parse step: the position after the consumed input on success, or the
/// position at which the mismatch was detected on failure.
///
/// Failure is ordinary data rather than an error type so that optional sections can roll back
/// without unwinding.
pub type ParseResult = Result<usize, usize>;

/// How a sign is printed and parsed for a numeric element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignStyle {
    /// Print a sign only for negative values; a leading `+` is rejected when strict.
    Normal,
    /// Always print a sign; a missing sign is rejected when strict.
    Always,
    /// Never print a sign.
    Never,
    /// Never print a sign; negative values fail to print.
    NotNegative,
    /// Print `+` only when the value has more digits than the minimum width.
    ExceedsPad,
}

/// A user-supplied printing step.
///
/// Implementations must append their entire output to `output` or fail without partial output.
pub trait DateTimePrinter: Send + Sync {
    /// Append the printed form of `source` to `output`.
    fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print>;

    /// Whether `source` can supply everything this printer needs. Optional sections skip
    /// themselves entirely when any contained printer answers `false`.
    #[inline]
    fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        let _ = source;
        true
    }
}

/// A user-supplied parsing step.
pub trait DateTimeParser: Send + Sync {
    /// Parse `text` starting at the byte position, recording results in `context`.
    fn parse(&self, context: &mut ParseContext<'_>, text: &str, position: usize) -> ParseResult;
}

/// A user-supplied element: a printer, a parser, or both.
#[derive(Clone)]
pub(crate) struct CustomElement {
    /// The printing half, if the element can print.
    printer: Option<Arc<dyn DateTimePrinter>>,
    /// The parsing half, if the element can parse.
    parser: Option<Arc<dyn DateTimeParser>>,
}

impl CustomElement {
    /// Create a custom element. At least one half must be present; the builder enforces that.
    pub(crate) fn new(
        printer: Option<Arc<dyn DateTimePrinter>>,
        parser: Option<Arc<dyn DateTimeParser>>,
    ) -> Self {
        Self { printer, parser }
    }
}

/// One position in a formatter's pipeline.
///
/// The family is closed: every element the engine supports is a variant here, and `print` and
/// `parse` dispatch on the tag. Elements are immutable; cloning is cheap because the larger
/// payloads are reference counted.
#[derive(Clone)]
pub(crate) enum Element {
    /// A numeric field.
    Number(NumberElement),
    /// A fixed-width numeric field windowed onto a base value.
    Reduced(ReducedElement),
    /// A decimal fraction of a field's range.
    Fraction(FractionElement),
    /// A field rendered as text.
    Text(TextElement),
    /// A single literal character.
    CharLiteral(CharLiteralElement),
    /// A literal string.
    StrLiteral(StrLiteralElement),
    /// Another element, padded to a fixed width.
    Pad(PadElement),
    /// A switch mutating the parse context's flags.
    Settings(SettingsElement),
    /// A zone offset.
    Offset(OffsetElement),
    /// A zone identifier or localized zone name.
    Zone(ZoneElement),
    /// A locale-dependent date/time pattern resolved through a chronology.
    Localized(LocalizedElement),
    /// A nested sequence of elements, possibly optional.
    Composite(Composite),
    /// A user-supplied printer and/or parser.
    Custom(CustomElement),
}

impl Element {
    /// Append this element's printed form of `source` to `output`.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        match self {
            Self::Number(element) => element.print(source, output, symbols),
            Self::Reduced(element) => element.print(source, output, symbols),
            Self::Fraction(element) => element.print(source, output, symbols),
            Self::Text(element) => element.print(source, output, symbols),
            Self::CharLiteral(element) => element.print(output),
            Self::StrLiteral(element) => element.print(output),
            Self::Pad(element) => element.print(source, output, symbols),
            Self::Settings(_) => Ok(()),
            Self::Offset(element) => element.print(source, output),
            Self::Zone(element) => element.print(source, output, symbols),
            Self::Localized(element) => element.print(source, output, symbols),
            Self::Composite(element) => element.print(source, output, symbols),
            Self::Custom(element) => match &element.printer {
                Some(printer) => printer.print(source, output, symbols),
                None => Err(Print::NotPrintable),
            },
        }
    }

    /// Parse `text` starting at the byte position, recording results in `context`.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        match self {
            Self::Number(element) => element.parse(context, text, position),
            Self::Reduced(element) => element.parse(context, text, position),
            Self::Fraction(element) => element.parse(context, text, position),
            Self::Text(element) => element.parse(context, text, position),
            Self::CharLiteral(element) => element.parse(context, text, position),
            Self::StrLiteral(element) => element.parse(context, text, position),
            Self::Pad(element) => element.parse(context, text, position),
            Self::Settings(element) => element.parse(context, position),
            Self::Offset(element) => element.parse(context, text, position),
            Self::Zone(element) => element.parse(context, text, position),
            Self::Localized(element) => element.parse(context, text, position),
            Self::Composite(element) => element.parse(context, text, position),
            Self::Custom(element) => match &element.parser {
                Some(parser) => parser.parse(context, text, position),
                None => Err(position),
            },
        }
    }

    /// Whether every position in this element has a printer.
    pub(crate) fn is_printable(&self) -> bool {
        match self {
            Self::Composite(element) => element.is_printable(),
            Self::Pad(element) => element.is_printable(),
            Self::Custom(element) => element.printer.is_some(),
            _ => true,
        }
    }

    /// Whether every position in this element has a parser.
    pub(crate) fn is_parseable(&self) -> bool {
        match self {
            Self::Composite(element) => element.is_parseable(),
            Self::Pad(element) => element.is_parseable(),
            Self::Custom(element) => element.parser.is_some(),
            _ => true,
        }
    }

    /// Whether `source` can supply everything this element needs to print.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        match self {
            Self::Number(element) => element.is_print_data_available(source),
            Self::Reduced(element) => element.is_print_data_available(source),
            Self::Fraction(element) => element.is_print_data_available(source),
            Self::Text(element) => element.is_print_data_available(source),
            Self::Pad(element) => element.is_print_data_available(source),
            Self::Offset(element) => element.is_print_data_available(source),
            Self::Zone(element) => element.is_print_data_available(source),
            Self::Composite(element) => element.is_print_data_available(source),
            Self::Custom(element) => element
                .printer
                .as_ref()
                .map_or(true, |printer| printer.is_print_data_available(source)),
            Self::CharLiteral(_) | Self::StrLiteral(_) | Self::Settings(_) | Self::Localized(_) => {
                true
            }
        }
    }
}

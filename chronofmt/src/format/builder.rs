//! The mutable builder that assembles formatters.

use core::fmt;
use std::sync::Arc;

use crate::chronology::{Chronology, FormatStyle};
use crate::error::InvalidPattern;
use crate::field::FieldRef;
use crate::format::element::{
    CharLiteralElement, Composite, CustomElement, DateTimeParser, DateTimePrinter, Element,
    FractionElement, LocalizedElement, NumberElement, OffsetElement, PadElement, ReducedElement,
    SettingsElement, SignStyle, StrLiteralElement, TextElement, ZoneElement,
};
use crate::format::pattern::{self, PatternLetters};
use crate::format::Formatter;
use crate::locale::Locale;
use crate::text::TextStyle;
use crate::zone::ZoneRegistry;

/// One level of the builder: the top level, or an optional section under construction.
struct Frame {
    /// The elements appended so far.
    elements: Vec<Element>,
    /// Whether this frame becomes an optional composite.
    optional: bool,
    /// The width the next appended element is padded to, or zero for none.
    pad_width: u8,
    /// The character the next appended element is padded with.
    pad_char: char,
    /// The index of the variable-width numeric element that the next fixed-width numeric append
    /// extends for adjacent-value parsing.
    value_index: Option<usize>,
}

impl Frame {
    fn new(optional: bool) -> Self {
        Self {
            elements: Vec::new(),
            optional,
            pad_width: 0,
            pad_char: ' ',
            value_index: None,
        }
    }
}

/// Builder to create formatters.
///
/// Elements are appended in print order. The builder is mutable and not thread-safe; it is
/// consumed by [`into_formatter`](Self::into_formatter) and cannot be reused.
///
/// All methods panic when called with structurally invalid arguments, such as widths outside
/// their permitted ranges or an [`optional_end`](Self::optional_end) without a matching start.
/// Pattern strings, which typically arrive as data rather than as code, report their problems as
/// [`InvalidPattern`] values instead.
pub struct FormatterBuilder {
    /// The frame stack. The first entry is the top level and is never popped; the last entry is
    /// the active frame.
    frames: Vec<Frame>,
}

impl FormatterBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new(false)],
        }
    }

    /// The active frame.
    fn active(&mut self) -> &mut Frame {
        self.frames
            .last_mut()
            .expect("the builder's frame stack is never empty")
    }

    /// Append an element, wrapping it in any pending padding. Clears the adjacent-value index;
    /// callers that establish or preserve one do so after this returns.
    fn append_internal(&mut self, element: Element) -> usize {
        let frame = self.active();
        let element = if frame.pad_width > 0 {
            let padded = Element::Pad(PadElement::new(element, frame.pad_width, frame.pad_char));
            frame.pad_width = 0;
            frame.pad_char = ' ';
            padded
        } else {
            element
        };
        frame.value_index = None;
        frame.elements.push(element);
        frame.elements.len() - 1
    }

    /// Append a fixed-width numeric element, reserving its digits on the most recent
    /// variable-width numeric element so the two can parse adjacently.
    fn append_fixed_width(&mut self, element: Element, width: u8) {
        let prior = self.active().value_index;
        let mut extended = None;
        if let Some(index) = prior {
            let frame = self.active();
            // A pad decorator in between breaks the chain; only a bare numeric element can be
            // widened in place.
            if let Element::Number(number) = &frame.elements[index] {
                let widened = number.with_subsequent_width(width);
                frame.elements[index] = Element::Number(widened);
                extended = Some(index);
            }
        }
        self.append_internal(element);
        if extended.is_some() {
            self.active().value_index = extended;
        }
    }

    /// Append a variable-width numeric element for the field: one to ten digits, negative values
    /// signed.
    pub fn append_value(&mut self, field: FieldRef) -> &mut Self {
        let element = Element::Number(NumberElement::new(field, 1, 10, SignStyle::Normal));
        let index = self.append_internal(element);
        self.active().value_index = Some(index);
        self
    }

    /// Append a fixed-width numeric element for the field: exactly `width` digits, zero padded,
    /// no sign.
    ///
    /// When this directly follows a variable-width numeric element, the earlier element reserves
    /// `width` digits so that both can be parsed from one undelimited digit run.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= width <= 10`.
    pub fn append_value_fixed(&mut self, field: FieldRef, width: u8) -> &mut Self {
        let element = Element::Number(NumberElement::new(
            field,
            width,
            width,
            SignStyle::NotNegative,
        ));
        self.append_fixed_width(element, width);
        self
    }

    /// Append a numeric element with explicit widths and sign handling.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= min_width <= max_width <= 10`.
    pub fn append_value_styled(
        &mut self,
        field: FieldRef,
        min_width: u8,
        max_width: u8,
        sign_style: SignStyle,
    ) -> &mut Self {
        if min_width == max_width && sign_style == SignStyle::NotNegative {
            return self.append_value_fixed(field, min_width);
        }
        let element = Element::Number(NumberElement::new(field, min_width, max_width, sign_style));
        let index = self.append_internal(element);
        self.active().value_index = Some(index);
        self
    }

    /// Append a reduced numeric element: exactly `width` digits parsed into the window
    /// `[base_value, base_value + 10^width)`.
    ///
    /// The element is fixed width, so it participates in adjacent-value parsing like
    /// [`append_value_fixed`](Self::append_value_fixed).
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= width <= 10`.
    pub fn append_value_reduced(
        &mut self,
        field: FieldRef,
        width: u8,
        base_value: i64,
    ) -> &mut Self {
        let element = Element::Reduced(ReducedElement::new(field, width, base_value));
        self.append_fixed_width(element, width);
        self
    }

    /// Append a fractional element for the field.
    ///
    /// # Panics
    ///
    /// Panics unless `min_width <= max_width`, with the maximum between one and nine, the field
    /// has a fixed value set, and its minimum value is zero.
    pub fn append_fraction(&mut self, field: FieldRef, min_width: u8, max_width: u8) -> &mut Self {
        assert!(
            field.is_fixed_value_set() && field.min_value() == 0,
            "fractions require a field with a fixed, zero-based value set",
        );
        let element = Element::Fraction(FractionElement::new(field, min_width, max_width));
        self.append_internal(element);
        self
    }

    /// Append a textual element for the field using the full style.
    pub fn append_text(&mut self, field: FieldRef) -> &mut Self {
        self.append_text_styled(field, TextStyle::Full)
    }

    /// Append a textual element for the field.
    pub fn append_text_styled(&mut self, field: FieldRef, style: TextStyle) -> &mut Self {
        let element = Element::Text(TextElement::new(field, style));
        self.append_internal(element);
        self
    }

    /// Append a literal character.
    pub fn append_literal(&mut self, literal: char) -> &mut Self {
        self.append_internal(Element::CharLiteral(CharLiteralElement::new(literal)));
        self
    }

    /// Append a literal string. An empty string appends nothing; a single character uses the
    /// character form.
    pub fn append_literal_str(&mut self, literal: &str) -> &mut Self {
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (None, _) => self,
            (Some(only), None) => self.append_literal(only),
            _ => {
                self.append_internal(Element::StrLiteral(StrLiteralElement::new(literal)));
                self
            }
        }
    }

    /// Append a zone offset element printing `utc_text` for a zero offset and `±hh[:]mm[[:]ss]`
    /// otherwise.
    pub fn append_offset(
        &mut self,
        utc_text: &str,
        include_colon: bool,
        allow_seconds: bool,
    ) -> &mut Self {
        let element = Element::Offset(OffsetElement::new(utc_text, include_colon, allow_seconds));
        self.append_internal(element);
        self
    }

    /// Append the standard zone offset element: `Z` for a zero offset, colons between groups,
    /// seconds when present.
    pub fn append_offset_id(&mut self) -> &mut Self {
        self.append_offset("Z", true, true)
    }

    /// Append a zone element printing and parsing zone identifiers from the registry.
    pub fn append_zone_id(&mut self, registry: Arc<dyn ZoneRegistry>) -> &mut Self {
        self.append_internal(Element::Zone(ZoneElement::new(registry, None)));
        self
    }

    /// Append a zone element printing localized zone names. Parsing still matches identifiers.
    pub fn append_zone_text(
        &mut self,
        registry: Arc<dyn ZoneRegistry>,
        style: TextStyle,
    ) -> &mut Self {
        self.append_internal(Element::Zone(ZoneElement::new(registry, Some(style))));
        self
    }

    /// Append an element that resolves a locale-specific pattern through the chronology on first
    /// use and then behaves like that pattern.
    ///
    /// # Panics
    ///
    /// Panics if both styles are `None`.
    pub fn append_localized(
        &mut self,
        date_style: Option<FormatStyle>,
        time_style: Option<FormatStyle>,
        chronology: Arc<dyn Chronology>,
        letters: &PatternLetters,
    ) -> &mut Self {
        assert!(
            date_style.is_some() || time_style.is_some(),
            "a localized element needs a date style, a time style, or both",
        );
        let element = Element::Localized(LocalizedElement::new(
            date_style,
            time_style,
            chronology,
            letters.clone(),
        ));
        self.append_internal(element);
        self
    }

    /// Append a user-supplied printer and/or parser.
    ///
    /// A formatter containing an element with no printer cannot print; one containing an element
    /// with no parser cannot parse.
    ///
    /// # Panics
    ///
    /// Panics if both halves are `None`.
    pub fn append_custom(
        &mut self,
        printer: Option<Arc<dyn DateTimePrinter>>,
        parser: Option<Arc<dyn DateTimeParser>>,
    ) -> &mut Self {
        assert!(
            printer.is_some() || parser.is_some(),
            "a custom element needs a printer, a parser, or both",
        );
        self.append_internal(Element::Custom(CustomElement::new(printer, parser)));
        self
    }

    /// Append all elements of a formatter as one unit.
    pub fn append_formatter(&mut self, formatter: &Formatter) -> &mut Self {
        let composite = formatter.composite().with_optional(false);
        self.append_internal(Element::Composite(composite));
        self
    }

    /// Append all elements of a formatter as one optional unit: it prints nothing when data is
    /// missing and parses all-or-nothing.
    pub fn append_optional(&mut self, formatter: &Formatter) -> &mut Self {
        let composite = formatter.composite().with_optional(true);
        self.append_internal(Element::Composite(composite));
        self
    }

    /// Pad the next appended element with spaces to the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn pad_next(&mut self, width: u8) -> &mut Self {
        self.pad_next_with(width, ' ')
    }

    /// Pad the next appended element with `pad_char` to the given width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn pad_next_with(&mut self, width: u8, pad_char: char) -> &mut Self {
        assert!(width >= 1, "the pad width must be at least one");
        let frame = self.active();
        frame.pad_width = width;
        frame.pad_char = pad_char;
        self
    }

    /// Append a switch making the remainder of the parse case sensitive. Parsing starts case
    /// sensitive.
    pub fn parse_case_sensitive(&mut self) -> &mut Self {
        self.append_internal(Element::Settings(SettingsElement::CaseSensitivity(true)));
        self
    }

    /// Append a switch making the remainder of the parse case insensitive.
    pub fn parse_case_insensitive(&mut self) -> &mut Self {
        self.append_internal(Element::Settings(SettingsElement::CaseSensitivity(false)));
        self
    }

    /// Append a switch making the remainder of the parse strict. Parsing starts strict.
    pub fn parse_strict(&mut self) -> &mut Self {
        self.append_internal(Element::Settings(SettingsElement::Strictness(true)));
        self
    }

    /// Append a switch making the remainder of the parse lenient.
    pub fn parse_lenient(&mut self) -> &mut Self {
        self.append_internal(Element::Settings(SettingsElement::Strictness(false)));
        self
    }

    /// Open an optional section. Everything appended before the matching
    /// [`optional_end`](Self::optional_end) prints only when its data is available and parses
    /// all-or-nothing.
    pub fn optional_start(&mut self) -> &mut Self {
        self.frames.push(Frame::new(true));
        self
    }

    /// Close the innermost optional section.
    ///
    /// An empty section is dropped entirely.
    ///
    /// # Panics
    ///
    /// Panics when no optional section is open.
    pub fn optional_end(&mut self) -> &mut Self {
        assert!(
            self.frames.len() > 1,
            "cannot call optional_end without a previous optional_start",
        );
        let Some(frame) = self.frames.pop() else {
            return self;
        };
        if !frame.elements.is_empty() {
            let composite = Composite::new(frame.elements, frame.optional);
            self.append_internal(Element::Composite(composite));
        }
        self
    }

    /// Compile a pattern string, appending its elements to this builder.
    ///
    /// See [`PatternLetters`] for how letters resolve to fields.
    pub fn append_pattern(
        &mut self,
        pattern: &str,
        letters: &PatternLetters,
    ) -> Result<&mut Self, InvalidPattern> {
        pattern::compile(self, pattern, letters)?;
        Ok(self)
    }

    /// Complete the builder, producing a formatter bound to the locale. Open optional sections
    /// are closed automatically.
    pub fn into_formatter(self, locale: Locale) -> Formatter {
        Formatter::new(locale, self.into_composite())
    }

    /// Complete the builder into its top-level composite.
    pub(crate) fn into_composite(mut self) -> Composite {
        while self.frames.len() > 1 {
            self.optional_end();
        }
        let Some(frame) = self.frames.pop() else {
            return Composite::new(Vec::new(), false);
        };
        Composite::new(frame.elements, false)
    }
}

impl Default for FormatterBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: usize = self.frames.iter().map(|frame| frame.elements.len()).sum();
        f.debug_struct("FormatterBuilder")
            .field("open_sections", &(self.frames.len() - 1))
            .field("elements", &elements)
            .finish()
    }
}

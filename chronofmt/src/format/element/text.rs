//! Textual field elements.

use crate::error::Print;
use crate::field::{Calendrical, FieldRef};
use crate::format::context::ParseContext;
use crate::format::element::number::NumberElement;
use crate::format::element::{ParseResult, SignStyle};
use crate::symbols::FormatSymbols;
use crate::text::{TextMatch, TextStyle};

/// A field rendered through its text store, falling back to digits when no text exists.
#[derive(Clone)]
pub(crate) struct TextElement {
    /// The field being printed or parsed.
    field: FieldRef,
    /// The style whose store is consulted.
    style: TextStyle,
    /// The numeric element used when no text is available or nothing matches.
    fallback: NumberElement,
}

impl TextElement {
    /// Create a text element.
    pub(crate) fn new(field: FieldRef, style: TextStyle) -> Self {
        let fallback = NumberElement::new(field.clone(), 1, 10, SignStyle::Normal);
        Self {
            field,
            style,
            fallback,
        }
    }

    /// Whether the source can supply the field.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.value_of(&self.field).is_some()
    }

    /// Append the value's display text, or its digits when the store has none.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        let Some(value) = source.value_of(&self.field) else {
            return Err(Print::FieldUnavailable {
                name: self.field.name().into(),
            });
        };
        if let Some(store) = self.field.text_store(symbols.locale(), self.style) {
            if let Some(text) = store.value_text(value) {
                output.push_str(text);
                return Ok(());
            }
        }
        self.fallback.print(source, output, symbols)
    }

    /// Match the input against display texts, falling back to digits.
    ///
    /// Strict parsing consults only this element's style; lenient parsing probes every style from
    /// longest to shortest before giving up on text.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let ignore_case = !context.is_case_sensitive();
        let locale = context.locale();
        if context.is_strict() {
            if let Some(store) = self.field.text_store(locale, self.style) {
                if let TextMatch::Match { length, value } =
                    store.match_text(ignore_case, &text[position..])
                {
                    context.set_parsed(self.field.clone(), value);
                    return Ok(position + length);
                }
            }
        } else {
            for style in TextStyle::LENIENT_ORDER {
                if let Some(store) = self.field.text_store(locale, style) {
                    if let TextMatch::Match { length, value } =
                        store.match_text(ignore_case, &text[position..])
                    {
                        context.set_parsed(self.field.clone(), value);
                        return Ok(position + length);
                    }
                }
            }
        }
        self.fallback.parse(context, text, position)
    }
}

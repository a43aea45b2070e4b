//! Fractional field elements.

use num_conv::prelude::*;

use crate::error::Print;
use crate::field::{Calendrical, FieldRef};
use crate::format::context::ParseContext;
use crate::format::element::ParseResult;
use crate::fraction::Fraction;
use crate::symbols::FormatSymbols;

/// A field rendered as a decimal separator followed by a fraction of the field's range.
///
/// The builder only constructs this for fields with a fixed, zero-based value set, so the
/// value-to-fraction conversion is always meaningful.
#[derive(Clone)]
pub(crate) struct FractionElement {
    /// The field being printed or parsed.
    field: FieldRef,
    /// The minimum number of fraction digits. Zero makes the whole element optional.
    min_width: u8,
    /// The maximum number of fraction digits.
    max_width: u8,
}

impl FractionElement {
    /// Create a fraction element.
    ///
    /// # Panics
    ///
    /// Panics unless `min_width <= max_width`, with the maximum between one and nine.
    pub(crate) fn new(field: FieldRef, min_width: u8, max_width: u8) -> Self {
        assert!(
            min_width <= max_width,
            "the minimum width must not exceed the maximum width",
        );
        assert!(max_width >= 1, "the maximum width must be at least one");
        assert!(max_width <= 9, "the maximum width must not exceed nine");
        Self {
            field,
            min_width,
            max_width,
        }
    }

    /// Whether the source can supply the field.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.value_of(&self.field).is_some()
    }

    /// Append the decimal separator and the field's value as a fraction of its range.
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
        let fraction = self.field.int_to_fraction(value)?;
        if fraction.is_zero() {
            if self.min_width > 0 {
                output.push(symbols.decimal_separator());
                for _ in 0..self.min_width {
                    output.push(symbols.zero_digit());
                }
            }
        } else {
            let scale = fraction.scale().clamp(self.min_width, self.max_width);
            output.push(symbols.decimal_separator());
            symbols.internationalize_into(&fraction.digits(scale), output);
        }
        Ok(())
    }

    /// Parse the decimal separator and between `min_width` and `max_width` digits.
    ///
    /// When the minimum width is zero, a missing separator (or end of input) is a zero-width
    /// success rather than a failure.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let symbols = context.symbols();
        let Some(first) = text[position..].chars().next() else {
            return if self.min_width > 0 {
                Err(position)
            } else {
                Ok(position)
            };
        };
        if first != symbols.decimal_separator() {
            return if self.min_width > 0 {
                Err(position)
            } else {
                Ok(position)
            };
        }

        let start = position + first.len_utf8();
        let max_width = self.max_width.extend::<usize>();
        let mut pos = start;
        let mut coefficient: u64 = 0;
        let mut digit_count = 0usize;
        for ch in text[start..].chars() {
            if digit_count == max_width {
                break;
            }
            let Some(digit) = symbols.digit_value(ch) else {
                break;
            };
            coefficient = coefficient * 10 + u64::from(digit);
            digit_count += 1;
            pos += ch.len_utf8();
        }
        if digit_count < self.min_width.extend() {
            return Err(start);
        }

        let fraction = Fraction::new(coefficient, digit_count.truncate());
        let value = self.field.fraction_to_int(fraction);
        context.set_parsed(self.field.clone(), value);
        Ok(pos)
    }
}

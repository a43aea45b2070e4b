//! Numeric field elements.

use chronofmt_core::util::{num_decimal_digits, pow10_i64};
use num_conv::prelude::*;

use crate::error::Print;
use crate::field::{Calendrical, FieldRef};
use crate::format::context::ParseContext;
use crate::format::element::{ParseResult, SignStyle};
use crate::symbols::FormatSymbols;

/// An integer field printed and parsed as a run of digits.
///
/// `subsequent_width` is the number of trailing digits this element must leave unconsumed for
/// the fixed-width elements that follow it. The builder raises it whenever a fixed-width numeric
/// element is appended directly after a variable-width one, which is what makes patterns such as
/// `yyyyMMdd` parseable.
#[derive(Clone)]
pub(crate) struct NumberElement {
    /// The field being printed or parsed.
    field: FieldRef,
    /// The minimum number of digits, enforced by zero padding when printing.
    min_width: u8,
    /// The maximum number of digits.
    max_width: u8,
    /// How the sign is handled.
    sign_style: SignStyle,
    /// Digits reserved for immediately following fixed-width elements.
    subsequent_width: u16,
}

impl NumberElement {
    /// Create a numeric element.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= min_width <= max_width <= 10`.
    pub(crate) fn new(field: FieldRef, min_width: u8, max_width: u8, sign_style: SignStyle) -> Self {
        assert!(min_width >= 1, "the minimum width must be at least one");
        assert!(
            min_width <= max_width,
            "the minimum width must not exceed the maximum width",
        );
        assert!(max_width <= 10, "the maximum width must not exceed ten");
        Self {
            field,
            min_width,
            max_width,
            sign_style,
            subsequent_width: 0,
        }
    }

    /// A copy of this element reserving `extra` more trailing digits for its successors.
    pub(crate) fn with_subsequent_width(&self, extra: u8) -> Self {
        Self {
            field: self.field.clone(),
            min_width: self.min_width,
            max_width: self.max_width,
            sign_style: self.sign_style,
            subsequent_width: self.subsequent_width + u16::from(extra),
        }
    }

    /// Whether the source can supply the field.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.value_of(&self.field).is_some()
    }

    /// Append the field's value as digits, padded to the minimum width.
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
        let magnitude = value.unsigned_abs();
        let length = num_decimal_digits(magnitude).extend::<usize>();
        if length > self.max_width.extend() {
            return Err(Print::ExceedsWidth {
                name: self.field.name().into(),
                value,
                max_width: self.max_width,
            });
        }
        match self.sign_style {
            SignStyle::Normal => {
                if value < 0 {
                    output.push(symbols.negative_sign());
                }
            }
            SignStyle::Always => output.push(if value < 0 {
                symbols.negative_sign()
            } else {
                symbols.positive_sign()
            }),
            SignStyle::ExceedsPad => {
                if value < 0 {
                    output.push(symbols.negative_sign());
                } else if self.min_width < 10 && value >= pow10_i64(self.min_width) {
                    output.push(symbols.positive_sign());
                }
            }
            SignStyle::Never => {}
            SignStyle::NotNegative => {
                if value < 0 {
                    return Err(Print::NegativeNotAllowed {
                        name: self.field.name().into(),
                        value,
                    });
                }
            }
        }
        for _ in length..self.min_width.extend() {
            output.push(symbols.zero_digit());
        }
        let mut buffer = itoa::Buffer::new();
        symbols.internationalize_into(buffer.format(magnitude), output);
        Ok(())
    }

    /// Parse an optionally signed run of digits.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let symbols = context.symbols();
        let Some(first) = text[position..].chars().next() else {
            return Err(position);
        };

        let mut pos = position;
        let mut positive = false;
        let mut negative = false;
        if first == symbols.positive_sign() {
            positive = true;
            match self.sign_style {
                SignStyle::Always | SignStyle::ExceedsPad => pos += first.len_utf8(),
                _ => {
                    if context.is_strict()
                        || (self.sign_style != SignStyle::Normal
                            && self.min_width == self.max_width)
                    {
                        return Err(position);
                    }
                    pos += first.len_utf8();
                }
            }
        } else if first == symbols.negative_sign() {
            negative = true;
            match self.sign_style {
                SignStyle::Always | SignStyle::ExceedsPad | SignStyle::Normal => {
                    pos += first.len_utf8();
                }
                _ => {
                    if context.is_strict() || self.min_width == self.max_width {
                        return Err(position);
                    }
                    pos += first.len_utf8();
                }
            }
        } else if self.sign_style == SignStyle::Always && context.is_strict() {
            return Err(position);
        }

        let sign_end = pos;
        let min_width = self.min_width.extend::<usize>();
        let subsequent_width = self.subsequent_width.extend::<usize>();
        let mut cap = self.max_width.extend::<usize>() + subsequent_width;
        let mut value: i64 = 0;
        let mut digit_count: usize = 0;
        for pass in 0..2 {
            // The first pass of an adjacent-parsing element only measures how many digits are
            // available; its accumulated value is discarded.
            let counting_only = subsequent_width > 0 && pass == 0;
            pos = sign_end;
            value = 0;
            digit_count = 0;
            for ch in text[sign_end..].chars() {
                if digit_count == cap {
                    break;
                }
                let Some(digit) = symbols.digit_value(ch) else {
                    break;
                };
                if !counting_only {
                    value = value * 10 + i64::from(digit);
                }
                digit_count += 1;
                pos += ch.len_utf8();
            }
            if digit_count < min_width {
                return Err(sign_end);
            }
            if counting_only {
                cap = min_width.max(digit_count.saturating_sub(subsequent_width));
            } else {
                break;
            }
        }
        if negative {
            value = -value;
        }

        if self.sign_style == SignStyle::ExceedsPad && context.is_strict() {
            if positive {
                // The positive sign is only printed when the value exceeds the pad width.
                if digit_count <= min_width {
                    return Err(position);
                }
            } else if !negative && digit_count > min_width {
                return Err(position);
            }
        }

        if context.is_strict() && !self.field.is_in_range(value) {
            return Err(position);
        }
        context.set_parsed(self.field.clone(), value);
        Ok(pos)
    }
}

/// A fixed-width numeric field that prints only the low digits of its value and reconstructs the
/// full value within a window starting at a base value.
#[derive(Clone)]
pub(crate) struct ReducedElement {
    /// The field being printed or parsed.
    field: FieldRef,
    /// The exact number of digits printed and parsed.
    width: u8,
    /// The smallest value the parsed window can produce.
    base_value: i64,
}

impl ReducedElement {
    /// Create a reduced element.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= width <= 10`.
    pub(crate) fn new(field: FieldRef, width: u8, base_value: i64) -> Self {
        assert!(
            (1..=10).contains(&width),
            "the reduced width must be between one and ten",
        );
        Self {
            field,
            width,
            base_value,
        }
    }

    /// Whether the source can supply the field.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.value_of(&self.field).is_some()
    }

    /// Append the low `width` digits of the field's value, zero padded.
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
        let low = (value % pow10_i64(self.width)).unsigned_abs();
        for _ in num_decimal_digits(low).extend::<usize>()..self.width.extend() {
            output.push(symbols.zero_digit());
        }
        let mut buffer = itoa::Buffer::new();
        symbols.internationalize_into(buffer.format(low), output);
        Ok(())
    }

    /// Parse exactly `width` digits into the window `[base_value, base_value + 10^width)`.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let symbols = context.symbols();
        let width = self.width.extend::<usize>();
        let mut pos = position;
        let mut low: i64 = 0;
        let mut digit_count = 0;
        for ch in text[position..].chars() {
            if digit_count == width {
                break;
            }
            let Some(digit) = symbols.digit_value(ch) else {
                break;
            };
            low = low * 10 + i64::from(digit);
            digit_count += 1;
            pos += ch.len_utf8();
        }
        if digit_count < width {
            return Err(position);
        }

        let range = pow10_i64(self.width);
        let mut value = self.base_value - self.base_value.rem_euclid(range) + low;
        if value < self.base_value {
            value += range;
        }
        if context.is_strict() && !self.field.is_in_range(value) {
            return Err(position);
        }
        context.set_parsed(self.field.clone(), value);
        Ok(pos)
    }
}

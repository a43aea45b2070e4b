//! The zone offset element.

use std::sync::Arc;

use crate::error::Print;
use crate::field::{offset_seconds, Calendrical};
use crate::format::context::ParseContext;
use crate::format::element::ParseResult;

/// Append a value below one hundred as exactly two ASCII digits.
fn push_two_digits(output: &mut String, value: u8) {
    debug_assert!(value <= 99);
    output.push(char::from(b'0' + value / 10));
    output.push(char::from(b'0' + value % 10));
}

/// The canonical identifier for a UTC offset, such as `UTC+01:30`.
pub(crate) fn utc_offset_id(total_seconds: i64) -> String {
    let mut id = String::from("UTC");
    if total_seconds != 0 {
        let magnitude = total_seconds.unsigned_abs();
        id.push(if total_seconds < 0 { '-' } else { '+' });
        push_two_digits(&mut id, (magnitude / 3600) as u8);
        id.push(':');
        push_two_digits(&mut id, (magnitude / 60 % 60) as u8);
        if magnitude % 60 != 0 {
            id.push(':');
            push_two_digits(&mut id, (magnitude % 60) as u8);
        }
    }
    id
}

/// A zone offset printed as `utc_text` when zero and `±hh[:]mm[[:]ss]` otherwise.
///
/// The total seconds are read from and stored under the engine's
/// [`offset_seconds`] field. Offsets are a machine format, so they always use ASCII digits and
/// signs regardless of the locale's symbols.
#[derive(Clone)]
pub(crate) struct OffsetElement {
    /// The text representing a zero offset.
    utc_text: Arc<str>,
    /// Whether a colon separates the groups.
    include_colon: bool,
    /// Whether a seconds group is printed and parsed.
    allow_seconds: bool,
}

impl OffsetElement {
    pub(crate) fn new(utc_text: &str, include_colon: bool, allow_seconds: bool) -> Self {
        Self {
            utc_text: utc_text.into(),
            include_colon,
            allow_seconds,
        }
    }

    /// The bare `±hh:mm[:ss]` form used by the zone element's `UTC` fast path.
    pub(crate) fn bare() -> Self {
        Self::new("", true, true)
    }

    /// Whether the source can supply an offset.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.value_of(&offset_seconds()).is_some()
    }

    /// Append the offset.
    pub(crate) fn print(&self, source: &dyn Calendrical, output: &mut String) -> Result<(), Print> {
        let field = offset_seconds();
        let Some(total) = source.value_of(&field) else {
            return Err(Print::FieldUnavailable {
                name: field.name().into(),
            });
        };
        let total = field.check_value(total)?;
        if total == 0 {
            output.push_str(&self.utc_text);
            return Ok(());
        }

        let magnitude = total.unsigned_abs();
        let seconds = (magnitude % 60) as u8;
        output.push(if total < 0 { '-' } else { '+' });
        push_two_digits(output, (magnitude / 3600) as u8);
        if self.include_colon {
            output.push(':');
        }
        push_two_digits(output, (magnitude / 60 % 60) as u8);
        if self.allow_seconds && seconds != 0 {
            if self.include_colon {
                output.push(':');
            }
            push_two_digits(output, seconds);
        }
        Ok(())
    }

    /// Parse the UTC text or a signed offset.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let field = offset_seconds();
        if self.utc_text.is_empty() {
            if position == text.len() {
                context.set_parsed(field, 0);
                return Ok(position);
            }
        } else {
            if position == text.len() {
                return Err(position);
            }
            let end = position + self.utc_text.len();
            if end <= text.len() && text.is_char_boundary(end) {
                let candidate = &text[position..end];
                let matched = candidate == &*self.utc_text
                    || (!context.is_case_sensitive()
                        && candidate.eq_ignore_ascii_case(&self.utc_text));
                if matched {
                    context.set_parsed(field, 0);
                    return Ok(end);
                }
            }
        }

        let bytes = text.as_bytes();
        let sign = match bytes.get(position) {
            Some(b'+') => 1_i64,
            Some(b'-') => -1_i64,
            _ => {
                // An empty UTC text matches zero-width in front of anything that is not an
                // offset.
                if self.utc_text.is_empty() {
                    context.set_parsed(field, 0);
                    return Ok(position);
                }
                return Err(position);
            }
        };

        let mut pos = position + 1;
        let Some(hours) = self.two_digits(bytes, &mut pos, false) else {
            return Err(position);
        };
        let Some(minutes) = self.two_digits(bytes, &mut pos, self.include_colon) else {
            return Err(position);
        };
        if minutes > 59 {
            return Err(position);
        }
        let mut seconds = 0;
        if self.allow_seconds {
            let mut attempt = pos;
            if let Some(value) = self.two_digits(bytes, &mut attempt, self.include_colon) {
                if value <= 59 {
                    seconds = value;
                    pos = attempt;
                }
            }
        }

        let total = sign * (i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds));
        if !field.is_in_range(total) {
            return Err(position);
        }
        context.set_parsed(field, total);
        Ok(pos)
    }

    /// Read one two-digit group, preceded by a colon when `leading_colon` is set. On failure the
    /// cursor is untouched.
    fn two_digits(&self, bytes: &[u8], pos: &mut usize, leading_colon: bool) -> Option<u8> {
        let mut cursor = *pos;
        if leading_colon {
            if bytes.get(cursor) != Some(&b':') {
                return None;
            }
            cursor += 1;
        }
        let tens = *bytes.get(cursor)?;
        let ones = *bytes.get(cursor + 1)?;
        if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
            return None;
        }
        *pos = cursor + 2;
        Some((tens - b'0') * 10 + (ones - b'0'))
    }
}

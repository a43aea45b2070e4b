//! The pattern mini-language compiler.
//!
//! Patterns are strings in which runs of ASCII letters select elements, quoted sections are
//! literal text, and square brackets delimit optional sections. The mapping from letters to
//! fields is not hard-wired: callers supply it as a [`PatternLetters`] table, which keeps the
//! compiler independent of any concrete calendar.

use core::fmt;
use std::sync::Arc;

use num_conv::prelude::*;

use crate::error::InvalidPattern;
use crate::field::FieldRef;
use crate::format::builder::FormatterBuilder;
use crate::format::element::SignStyle;
use crate::text::TextStyle;
use crate::zone::ZoneRegistry;

/// The table a pattern is compiled against: one field per letter, plus the zone registry used by
/// the `z` and `I` letters.
///
/// A handful of letters carry extra meaning on top of their field mapping: `y` and `x` get
/// year-style widths (two letters is a reduced year based at 2000), `M` switches to text at
/// three letters, `a` and `E` are always textual, and `H K m s S n` may host an `f` fraction
/// modifier. Unmapped letters compile to themselves as literals.
#[derive(Clone, Default)]
pub struct PatternLetters {
    /// The letter table, in insertion order.
    rules: Vec<(char, FieldRef)>,
    /// The registry behind the `z` and `I` letters, when zones are in play.
    zone_registry: Option<Arc<dyn ZoneRegistry>>,
}

impl PatternLetters {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// This table with `letter` mapped to `field`, replacing any earlier mapping.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not an ASCII letter.
    pub fn with_rule(mut self, letter: char, field: FieldRef) -> Self {
        assert!(
            letter.is_ascii_alphabetic(),
            "pattern letters must be ASCII letters",
        );
        self.rules.retain(|(existing, _)| *existing != letter);
        self.rules.push((letter, field));
        self
    }

    /// This table with the zone registry the `z` and `I` letters resolve against.
    pub fn with_zone_registry(mut self, registry: Arc<dyn ZoneRegistry>) -> Self {
        self.zone_registry = Some(registry);
        self
    }

    /// The field mapped to a letter.
    fn rule(&self, letter: char) -> Option<&FieldRef> {
        self.rules
            .iter()
            .find(|(candidate, _)| *candidate == letter)
            .map(|(_, field)| field)
    }

    /// The zone registry, if one was supplied.
    fn registry(&self) -> Option<&Arc<dyn ZoneRegistry>> {
        self.zone_registry.as_ref()
    }
}

impl fmt::Debug for PatternLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.rules.iter().map(|(letter, _)| *letter).collect();
        f.debug_struct("PatternLetters")
            .field("letters", &letters)
            .field("zone_registry", &self.zone_registry.is_some())
            .finish()
    }
}

/// Compile `pattern` onto the builder.
pub(crate) fn compile(
    builder: &mut FormatterBuilder,
    pattern: &str,
    letters: &PatternLetters,
) -> Result<(), InvalidPattern> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut depth = 0_usize;
    let mut index = 0;
    while index < chars.len() {
        let (byte_pos, current) = chars[index];
        if current.is_ascii_alphabetic() {
            let run_start = index;
            index += 1;
            while index < chars.len() && chars[index].1 == current {
                index += 1;
            }
            let count = index - run_start;
            match current {
                'p' => {
                    // Padding applies to whatever the next letter run compiles to.
                    if index >= chars.len() || !chars[index].1.is_ascii_alphabetic() {
                        return Err(InvalidPattern::PadWithoutTarget { index: byte_pos });
                    }
                    if count > u8::MAX.extend() {
                        return Err(InvalidPattern::InvalidCount {
                            letter: 'p',
                            count,
                            index: byte_pos,
                        });
                    }
                    builder.pad_next(count.truncate());
                }
                'f' => {
                    let Some(&(host_pos, host)) = chars.get(index) else {
                        return Err(InvalidPattern::FractionWithoutTarget { index: byte_pos });
                    };
                    if !matches!(host, 'H' | 'K' | 'm' | 's' | 'S' | 'n') {
                        return Err(InvalidPattern::FractionWithoutTarget { index: host_pos });
                    }
                    let Some(field) = letters.rule(host) else {
                        return Err(InvalidPattern::FractionWithoutTarget { index: host_pos });
                    };
                    let field = field.clone();
                    index += 1;
                    let host_start = index;
                    while index < chars.len() && chars[index].1 == host {
                        index += 1;
                    }
                    let host_count = index - host_start + 1;
                    if host_count > 9 {
                        return Err(InvalidPattern::InvalidCount {
                            letter: host,
                            count: host_count,
                            index: host_pos,
                        });
                    }
                    let width = host_count.truncate::<u8>();
                    if count == 1 {
                        builder.append_fraction(field, width, width);
                    } else {
                        builder.append_fraction(field, width, 9);
                    }
                }
                'z' => {
                    let Some(registry) = letters.registry() else {
                        return Err(InvalidPattern::NoZoneRegistry { index: byte_pos });
                    };
                    let style = if count < 4 {
                        TextStyle::Short
                    } else {
                        TextStyle::Full
                    };
                    builder.append_zone_text(Arc::clone(registry), style);
                }
                'I' => {
                    let Some(registry) = letters.registry() else {
                        return Err(InvalidPattern::NoZoneRegistry { index: byte_pos });
                    };
                    builder.append_zone_id(Arc::clone(registry));
                }
                'Z' => {
                    let (utc_text, include_colon, allow_seconds) = match count {
                        1 => ("+0000", false, false),
                        2 => ("+00:00", true, false),
                        3 => ("Z", false, true),
                        _ => ("Z", true, true),
                    };
                    builder.append_offset(utc_text, include_colon, allow_seconds);
                }
                _ => match letters.rule(current) {
                    Some(field) => {
                        let field = field.clone();
                        append_field(builder, current, count, byte_pos, field)?;
                    }
                    None => {
                        let run: String = chars[run_start..index].iter().map(|(_, ch)| *ch).collect();
                        builder.append_literal_str(&run);
                    }
                },
            }
        } else if current == '\'' {
            index += 1;
            let mut literal = String::new();
            loop {
                let Some(&(_, ch)) = chars.get(index) else {
                    return Err(InvalidPattern::UnterminatedLiteral { index: byte_pos });
                };
                if ch == '\'' {
                    if chars.get(index + 1).map(|&(_, next)| next) == Some('\'') {
                        literal.push('\'');
                        index += 2;
                    } else {
                        index += 1;
                        break;
                    }
                } else {
                    literal.push(ch);
                    index += 1;
                }
            }
            if literal.is_empty() {
                builder.append_literal('\'');
            } else {
                builder.append_literal_str(&literal);
            }
        } else if current == '[' {
            depth += 1;
            builder.optional_start();
            index += 1;
        } else if current == ']' {
            if depth == 0 {
                return Err(InvalidPattern::UnmatchedClosingBracket { index: byte_pos });
            }
            depth -= 1;
            builder.optional_end();
            index += 1;
        } else {
            builder.append_literal(current);
            index += 1;
        }
    }
    Ok(())
}

/// Append the element a mapped letter run stands for.
fn append_field(
    builder: &mut FormatterBuilder,
    letter: char,
    count: usize,
    byte_pos: usize,
    field: FieldRef,
) -> Result<(), InvalidPattern> {
    let invalid_count = InvalidPattern::InvalidCount {
        letter,
        count,
        index: byte_pos,
    };
    match letter {
        'y' | 'x' => {
            if count == 2 {
                builder.append_value_reduced(field, 2, 2000);
            } else if count < 4 {
                builder.append_value_styled(field, count.truncate(), 10, SignStyle::Normal);
            } else if count <= 10 {
                builder.append_value_styled(field, count.truncate(), 10, SignStyle::ExceedsPad);
            } else {
                return Err(invalid_count);
            }
        }
        'M' => match count {
            1 => {
                builder.append_value(field);
            }
            2 => {
                builder.append_value_fixed(field, 2);
            }
            3 => {
                builder.append_text_styled(field, TextStyle::Short);
            }
            _ => {
                builder.append_text_styled(field, TextStyle::Full);
            }
        },
        'a' | 'E' => {
            let style = if count < 4 {
                TextStyle::Short
            } else {
                TextStyle::Full
            };
            builder.append_text_styled(field, style);
        }
        _ => {
            if count == 1 {
                builder.append_value(field);
            } else if count <= 10 {
                builder.append_value_fixed(field, count.truncate());
            } else {
                return Err(invalid_count);
            }
        }
    }
    Ok(())
}

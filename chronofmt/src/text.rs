//! Textual representations of field values.

/// The size of a textual representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// The full form, such as `January`.
    Full,
    /// An abbreviated form, such as `Jan`.
    Short,
    /// A minimal form, such as `J`, typically not unique.
    Narrow,
}

impl TextStyle {
    /// The order in which lenient parsing probes the styles.
    pub(crate) const LENIENT_ORDER: [Self; 3] = [Self::Full, Self::Short, Self::Narrow];
}

/// The outcome of matching input text against a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// The store cannot match at all because its texts are ambiguous.
    Disabled,
    /// No entry matched the input.
    NoMatch,
    /// An entry matched the input.
    Match {
        /// The number of input bytes the matched text occupies.
        length: usize,
        /// The field value the text maps to.
        value: i64,
    },
}

/// The display texts for one field in one locale and style.
///
/// A store maps each field value to its display text and supports the reverse lookup used while
/// parsing. If two values share a display text the store cannot decide between them, so reverse
/// matching is disabled wholesale and parsers fall back to digits.
#[derive(Debug, Clone)]
pub struct TextStore {
    /// Value to display text, in insertion order.
    texts: Vec<(i64, Box<str>)>,
    /// The same entries ordered by descending text length, so a scan finds the longest match
    /// first. Empty when matching is disabled.
    by_length: Vec<(Box<str>, i64)>,
    /// Whether reverse matching is possible.
    enabled: bool,
}

impl TextStore {
    /// Create a store from value/text pairs.
    ///
    /// # Panics
    ///
    /// Panics if any text is empty.
    pub fn new(entries: impl IntoIterator<Item = (i64, String)>) -> Self {
        let texts: Vec<(i64, Box<str>)> = entries
            .into_iter()
            .map(|(value, text)| {
                assert!(!text.is_empty(), "display text must not be empty");
                (value, text.into_boxed_str())
            })
            .collect();

        let mut enabled = true;
        for (index, (_, text)) in texts.iter().enumerate() {
            if texts[..index].iter().any(|(_, seen)| seen == text) {
                enabled = false;
                break;
            }
        }

        let mut by_length: Vec<(Box<str>, i64)> = if enabled {
            texts
                .iter()
                .map(|(value, text)| (text.clone(), *value))
                .collect()
        } else {
            Vec::new()
        };
        by_length.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

        Self {
            texts,
            by_length,
            enabled,
        }
    }

    /// The display text for a value, if the store has one.
    pub fn value_text(&self, value: i64) -> Option<&str> {
        self.texts
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, text)| &**text)
    }

    /// Match the start of `input` against the store's texts, longest first.
    pub fn match_text(&self, ignore_case: bool, input: &str) -> TextMatch {
        if !self.enabled {
            return TextMatch::Disabled;
        }
        for (text, value) in &self.by_length {
            let length = text.len();
            if length > input.len() || !input.is_char_boundary(length) {
                continue;
            }
            let prefix = &input[..length];
            let matched = if ignore_case {
                prefix.eq_ignore_ascii_case(text)
            } else {
                prefix == &**text
            };
            if matched {
                return TextMatch::Match {
                    length,
                    value: *value,
                };
            }
        }
        TextMatch::NoMatch
    }
}

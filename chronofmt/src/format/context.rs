//! Mutable state threaded through a single parse call.

use crate::field::FieldRef;
use crate::locale::Locale;
use crate::symbols::FormatSymbols;

/// Everything an optional section must be able to restore on failure.
#[derive(Debug, Clone)]
struct Snapshot {
    /// The parsed values at the time the section was entered.
    parsed: Vec<(FieldRef, i64)>,
    /// The parsed zone at the time the section was entered.
    zone: Option<Box<str>>,
    /// Whether parsing was strict.
    strict: bool,
    /// Whether parsing was case sensitive.
    case_sensitive: bool,
}

/// The mutable state of one parse call.
///
/// A context is created per call to [`Formatter::parse`](crate::Formatter::parse), threaded
/// through every element, and discarded afterwards. It is never shared between threads.
///
/// Elements record decoded values with [`set_parsed`](Self::set_parsed); no range validation
/// happens at that point, so callers must have validated already. Failure is never signalled
/// through the context: elements report it in their return position.
#[derive(Debug)]
pub struct ParseContext<'a> {
    /// The symbols of the formatter's locale.
    symbols: &'a FormatSymbols,
    /// Whether parsing is strict. Defaults to true.
    strict: bool,
    /// Whether text and literal matching is case sensitive. Defaults to true.
    case_sensitive: bool,
    /// The values parsed so far. Small enough that a vector beats a map.
    parsed: Vec<(FieldRef, i64)>,
    /// The zone identifier parsed so far, if any.
    zone: Option<Box<str>>,
    /// Saved states for optional sections currently being attempted.
    saved: Vec<Snapshot>,
}

impl<'a> ParseContext<'a> {
    /// Create a context bound to the given symbols.
    pub(crate) fn new(symbols: &'a FormatSymbols) -> Self {
        Self {
            symbols,
            strict: true,
            case_sensitive: true,
            parsed: Vec::new(),
            zone: None,
            saved: Vec::new(),
        }
    }

    /// The symbols of the formatter's locale.
    #[inline]
    pub fn symbols(&self) -> &'a FormatSymbols {
        self.symbols
    }

    /// The formatter's locale.
    #[inline]
    pub fn locale(&self) -> &'a Locale {
        self.symbols.locale()
    }

    /// Whether parsing is strict.
    #[inline]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Change whether parsing is strict for the remainder of the parse.
    #[inline]
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Whether text and literal matching is case sensitive.
    #[inline]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Change whether matching is case sensitive for the remainder of the parse.
    #[inline]
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// The value parsed for a field, if one has been recorded.
    pub fn parsed(&self, field: &FieldRef) -> Option<i64> {
        self.parsed
            .iter()
            .find(|(candidate, _)| candidate == field)
            .map(|(_, value)| *value)
    }

    /// Record a parsed value, overwriting any earlier value for the same field.
    ///
    /// The value is stored as-is; the caller is responsible for any validation.
    pub fn set_parsed(&mut self, field: FieldRef, value: i64) {
        match self.parsed.iter_mut().find(|(candidate, _)| *candidate == field) {
            Some((_, slot)) => *slot = value,
            None => self.parsed.push((field, value)),
        }
    }

    /// The zone identifier parsed so far, if any.
    #[inline]
    pub fn parsed_zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Record a parsed zone identifier, overwriting any earlier one.
    #[inline]
    pub fn set_parsed_zone(&mut self, id: impl Into<Box<str>>) {
        self.zone = Some(id.into());
    }

    /// Enter an optional section, saving everything a failure must restore.
    pub(crate) fn start_optional(&mut self) {
        self.saved.push(Snapshot {
            parsed: self.parsed.clone(),
            zone: self.zone.clone(),
            strict: self.strict,
            case_sensitive: self.case_sensitive,
        });
    }

    /// Leave an optional section. On failure the context is restored bit-exactly to its state at
    /// the matching [`start_optional`](Self::start_optional).
    pub(crate) fn end_optional(&mut self, success: bool) {
        let Some(snapshot) = self.saved.pop() else {
            debug_assert!(false, "end_optional without start_optional");
            return;
        };
        if !success {
            self.parsed = snapshot.parsed;
            self.zone = snapshot.zone;
            self.strict = snapshot.strict;
            self.case_sensitive = snapshot.case_sensitive;
        }
    }

    /// Dismantle the context into its recorded results.
    pub(crate) fn into_results(self) -> (Vec<(FieldRef, i64)>, Option<Box<str>>) {
        (self.parsed, self.zone)
    }
}

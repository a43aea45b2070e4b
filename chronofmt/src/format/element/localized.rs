//! The localized date/time style element.

use std::sync::{Arc, Mutex};

use crate::chronology::{Chronology, FormatStyle};
use crate::error::Print;
use crate::field::Calendrical;
use crate::format::builder::FormatterBuilder;
use crate::format::context::ParseContext;
use crate::format::element::{Composite, ParseResult};
use crate::format::pattern::PatternLetters;
use crate::locale::Locale;
use crate::symbols::FormatSymbols;

/// The shared state of a localized element.
struct Inner {
    /// The date style, if a date portion was requested.
    date_style: Option<FormatStyle>,
    /// The time style, if a time portion was requested.
    time_style: Option<FormatStyle>,
    /// The chronology that resolves styles to patterns.
    chronology: Arc<dyn Chronology>,
    /// The letter table the resolved pattern is compiled with.
    letters: PatternLetters,
    /// Compiled composites, one per locale seen so far.
    cache: Mutex<Vec<(Locale, Composite)>>,
}

/// A date/time pattern resolved lazily against the active locale through a chronology, then
/// compiled and run like any user pattern.
#[derive(Clone)]
pub(crate) struct LocalizedElement {
    /// The element's shared state; clones reuse the compiled-pattern cache.
    inner: Arc<Inner>,
}

impl LocalizedElement {
    /// Create a localized element. The builder has already checked that at least one style is
    /// present.
    pub(crate) fn new(
        date_style: Option<FormatStyle>,
        time_style: Option<FormatStyle>,
        chronology: Arc<dyn Chronology>,
        letters: PatternLetters,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                date_style,
                time_style,
                chronology,
                letters,
                cache: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The compiled composite for a locale, resolving and compiling on first use.
    fn composite_for(&self, locale: &Locale) -> Option<Composite> {
        let mut guard = match self.inner.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some((_, composite)) = guard.iter().find(|(cached, _)| cached == locale) {
            return Some(composite.clone());
        }
        let pattern = self.inner.chronology.localized_pattern(
            self.inner.date_style,
            self.inner.time_style,
            locale,
        )?;
        let mut builder = FormatterBuilder::new();
        builder.append_pattern(&pattern, &self.inner.letters).ok()?;
        let composite = builder.into_composite();
        guard.push((locale.clone(), composite.clone()));
        Some(composite)
    }

    /// Print through the composite resolved for the formatter's locale.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        match self.composite_for(symbols.locale()) {
            Some(composite) => composite.print(source, output, symbols),
            None => Err(Print::Localized),
        }
    }

    /// Parse through the composite resolved for the formatter's locale. An unresolvable pattern
    /// is an ordinary mismatch rather than an error.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        match self.composite_for(context.locale()) {
            Some(composite) => composite.parse(context, text, position),
            None => Err(position),
        }
    }
}

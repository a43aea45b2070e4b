//! Elements that reconfigure the parse context.

use crate::format::context::ParseContext;
use crate::format::element::ParseResult;

/// A zero-width switch flipping one of the parse context's flags for the remainder of the parse.
/// Printing ignores these entirely.
#[derive(Clone, Copy)]
pub(crate) enum SettingsElement {
    /// Set whether parsing is strict.
    Strictness(bool),
    /// Set whether matching is case sensitive.
    CaseSensitivity(bool),
}

impl SettingsElement {
    /// Apply the switch. Never consumes input and never fails.
    pub(crate) fn parse(self, context: &mut ParseContext<'_>, position: usize) -> ParseResult {
        match self {
            Self::Strictness(strict) => context.set_strict(strict),
            Self::CaseSensitivity(case_sensitive) => context.set_case_sensitive(case_sensitive),
        }
        Ok(position)
    }
}

//! Literal elements.

use std::sync::Arc;

use crate::format::context::ParseContext;
use crate::format::element::ParseResult;

/// A single literal character.
#[derive(Clone, Copy)]
pub(crate) struct CharLiteralElement {
    /// The character to emit and expect.
    literal: char,
}

impl CharLiteralElement {
    pub(crate) const fn new(literal: char) -> Self {
        Self { literal }
    }

    /// Append the literal.
    pub(crate) fn print(&self, output: &mut String) -> Result<(), crate::error::Print> {
        output.push(self.literal);
        Ok(())
    }

    /// Match the literal, honoring the context's case sensitivity.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let Some(ch) = text[position..].chars().next() else {
            return Err(position);
        };
        let matched = ch == self.literal
            || (!context.is_case_sensitive() && ch.eq_ignore_ascii_case(&self.literal));
        if matched {
            Ok(position + ch.len_utf8())
        } else {
            Err(position)
        }
    }
}

/// A literal string.
#[derive(Clone)]
pub(crate) struct StrLiteralElement {
    /// The text to emit and expect.
    literal: Arc<str>,
}

impl StrLiteralElement {
    pub(crate) fn new(literal: &str) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Append the literal.
    pub(crate) fn print(&self, output: &mut String) -> Result<(), crate::error::Print> {
        output.push_str(&self.literal);
        Ok(())
    }

    /// Match the literal, honoring the context's case sensitivity.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let end = position + self.literal.len();
        if end > text.len() || !text.is_char_boundary(end) {
            return Err(position);
        }
        let candidate = &text[position..end];
        let matched = candidate == &*self.literal
            || (!context.is_case_sensitive() && candidate.eq_ignore_ascii_case(&self.literal));
        if matched {
            Ok(end)
        } else {
            Err(position)
        }
    }
}

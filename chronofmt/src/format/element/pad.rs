//! The padding decorator.

use std::sync::Arc;

use num_conv::prelude::*;

use crate::error::Print;
use crate::field::Calendrical;
use crate::format::context::ParseContext;
use crate::format::element::{Element, ParseResult};
use crate::symbols::FormatSymbols;

/// Another element padded to a fixed character width.
#[derive(Clone)]
pub(crate) struct PadElement {
    /// The decorated element.
    inner: Arc<Element>,
    /// The width the output is padded to, and the exact size of the parse window.
    width: u8,
    /// The character used for padding.
    pad_char: char,
}

impl PadElement {
    pub(crate) fn new(inner: Element, width: u8, pad_char: char) -> Self {
        Self {
            inner: Arc::new(inner),
            width,
            pad_char,
        }
    }

    pub(crate) fn is_printable(&self) -> bool {
        self.inner.is_printable()
    }

    pub(crate) fn is_parseable(&self) -> bool {
        self.inner.is_parseable()
    }

    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        self.inner.is_print_data_available(source)
    }

    /// Render the inner element to a scratch buffer and left-pad it to the width.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        let mut scratch = String::new();
        self.inner.print(source, &mut scratch, symbols)?;
        let printed = scratch.chars().count();
        if printed > self.width.extend() {
            return Err(Print::ExceedsPadWidth { width: self.width });
        }
        for _ in printed..self.width.extend() {
            output.push(self.pad_char);
        }
        output.push_str(&scratch);
        Ok(())
    }

    /// Strip leading pad characters inside a window of exactly `width` characters, then hand the
    /// window to the inner parser.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let width = self.width.extend::<usize>();
        let mut window_end = position;
        let mut chars = 0;
        for ch in text[position..].chars() {
            if chars == width {
                break;
            }
            window_end += ch.len_utf8();
            chars += 1;
        }
        if chars < width {
            return Err(position);
        }

        let mut pos = position;
        for ch in text[position..window_end].chars() {
            if ch != self.pad_char {
                break;
            }
            pos += ch.len_utf8();
        }
        self.inner.parse(context, &text[..window_end], pos)
    }
}

//! The composite printer-parser.

use std::sync::Arc;

use crate::error::Print;
use crate::field::Calendrical;
use crate::format::context::ParseContext;
use crate::format::element::{Element, ParseResult};
use crate::symbols::FormatSymbols;

/// An immutable sequence of elements, run in order.
///
/// This is the artifact the builder produces: a formatter is a composite bound to a locale, and
/// inlined formatters become composite elements of their host. Cloning shares the elements.
///
/// An optional composite is all-or-nothing in both directions. It prints nothing when any
/// contained printer lacks data, and a parse failure anywhere inside rolls the context back and
/// succeeds having consumed nothing.
#[derive(Clone)]
pub(crate) struct Composite {
    /// The elements, in print order.
    elements: Arc<[Element]>,
    /// Whether the sequence is optional.
    optional: bool,
}

impl Composite {
    pub(crate) fn new(elements: Vec<Element>, optional: bool) -> Self {
        Self {
            elements: elements.into(),
            optional,
        }
    }

    /// This composite with a different optional flag, sharing the elements.
    pub(crate) fn with_optional(&self, optional: bool) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            optional,
        }
    }

    /// Whether every position has a printer.
    pub(crate) fn is_printable(&self) -> bool {
        self.elements.iter().all(Element::is_printable)
    }

    /// Whether every position has a parser.
    pub(crate) fn is_parseable(&self) -> bool {
        self.elements.iter().all(Element::is_parseable)
    }

    /// Whether the source satisfies this composite as a printer. An optional composite can
    /// always print (possibly nothing), so it satisfies an enclosing section's probe
    /// unconditionally; only its own body is gated on the contained printers.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        self.optional || self.contents_available(source)
    }

    /// Whether the source can supply every element directly contained here.
    fn contents_available(&self, source: &dyn Calendrical) -> bool {
        self.elements
            .iter()
            .all(|element| element.is_print_data_available(source))
    }

    /// Print each element in order. An optional composite with missing data prints nothing.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        if self.optional && !self.contents_available(source) {
            return Ok(());
        }
        for element in self.elements.iter() {
            element.print(source, output, symbols)?;
        }
        Ok(())
    }

    /// Parse each element in order, left to right.
    ///
    /// An optional composite converts any contained failure into a zero-width success after
    /// restoring the context; a non-optional composite propagates the failure unchanged.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        if self.optional {
            context.start_optional();
            let mut pos = position;
            for element in self.elements.iter() {
                match element.parse(context, text, pos) {
                    Ok(next) => pos = next,
                    Err(_) => {
                        context.end_optional(false);
                        return Ok(position);
                    }
                }
            }
            context.end_optional(true);
            Ok(pos)
        } else {
            let mut pos = position;
            for element in self.elements.iter() {
                pos = element.parse(context, text, pos)?;
            }
            Ok(pos)
        }
    }
}

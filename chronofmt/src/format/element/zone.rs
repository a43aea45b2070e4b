//! The zone identifier element and its substring tree.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::error::Print;
use crate::field::{offset_seconds, Calendrical};
use crate::format::context::ParseContext;
use crate::format::element::offset::{utc_offset_id, OffsetElement};
use crate::format::element::ParseResult;
use crate::symbols::FormatSymbols;
use crate::text::TextStyle;
use crate::zone::ZoneRegistry;

/// A trie keyed by substrings whose lengths are the distinct lengths of the registered zone
/// identifiers. Walking it finds the longest identifier prefixing the input in one pass per
/// distinct length rather than one per identifier.
struct SubstringTree {
    /// The number of input bytes this node inspects.
    length: usize,
    /// Substrings of `length` bytes mapped to the subtree for longer identifiers sharing that
    /// prefix, or `None` for an identifier that ends here.
    children: HashMap<Box<str>, Option<SubstringTree>>,
}

impl SubstringTree {
    fn new(length: usize) -> Self {
        Self {
            length,
            children: HashMap::new(),
        }
    }

    /// Insert an identifier at least as long as this node's length. Identifiers must be inserted
    /// shortest first; a sentinel overwritten by a later subtree is recovered by the validation
    /// against the full identifier set after the walk.
    fn insert(&mut self, id: &str) {
        if id.len() == self.length {
            self.children.insert(id.into(), None);
        } else if id.len() > self.length && id.is_char_boundary(self.length) {
            let prefix = &id[..self.length];
            let slot = self.children.entry(prefix.into()).or_insert(None);
            if slot.is_none() {
                *slot = Some(Self::new(id.len()));
            }
            if let Some(child) = slot {
                child.insert(id);
            }
        }
    }
}

/// A snapshot of the registry's identifiers together with the tree built over them.
struct IdTree {
    /// The identifiers the tree was built from.
    ids: BTreeSet<String>,
    /// The tree, absent when the registry is empty.
    root: Option<SubstringTree>,
}

impl IdTree {
    fn build(ids: BTreeSet<String>) -> Self {
        let mut sorted: Vec<&str> = ids.iter().map(String::as_str).collect();
        sorted.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        let root = sorted.first().map(|shortest| {
            let mut root = SubstringTree::new(shortest.len());
            for id in &sorted {
                root.insert(id);
            }
            root
        });
        Self { ids, root }
    }
}

/// A time zone printed as its identifier or localized name and parsed as an identifier.
///
/// Parsing always matches identifiers, even with a text style: localized names are not reliably
/// reversible. The tree over the registry's identifiers is cached across clones of the element
/// and rebuilt whenever the registry's identifier set changes size.
#[derive(Clone)]
pub(crate) struct ZoneElement {
    /// The registry identifiers are resolved against.
    registry: Arc<dyn ZoneRegistry>,
    /// The style for localized names, or `None` to print the raw identifier.
    style: Option<TextStyle>,
    /// The cached identifier tree, shared by every clone of this element.
    cache: Arc<Mutex<Option<Arc<IdTree>>>>,
}

impl ZoneElement {
    pub(crate) fn new(registry: Arc<dyn ZoneRegistry>, style: Option<TextStyle>) -> Self {
        Self {
            registry,
            style,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether the source carries a zone.
    pub(crate) fn is_print_data_available(&self, source: &dyn Calendrical) -> bool {
        source.zone_id().is_some()
    }

    /// Append the zone's identifier, or its localized name when a style is set and the registry
    /// knows one.
    pub(crate) fn print(
        &self,
        source: &dyn Calendrical,
        output: &mut String,
        symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        let Some(id) = source.zone_id() else {
            return Err(Print::FieldUnavailable {
                name: "ZoneId".into(),
            });
        };
        let localized = self.style.and_then(|style| {
            self.registry
                .zone(&id)
                .and_then(|zone| zone.localized_name(symbols.locale(), style))
        });
        match localized {
            Some(name) => output.push_str(&name),
            None => output.push_str(&id),
        }
        Ok(())
    }

    /// Walk the substring tree for the longest known identifier, falling back to the `UTC`
    /// offset forms.
    pub(crate) fn parse(
        &self,
        context: &mut ParseContext<'_>,
        text: &str,
        position: usize,
    ) -> ParseResult {
        let tree = self.snapshot();

        let mut candidate_end = None;
        let mut node = tree.root.as_ref();
        while let Some(current) = node {
            let end = position + current.length;
            if end > text.len() || !text.is_char_boundary(end) {
                break;
            }
            match current.children.get(&text[position..end]) {
                Some(child) => {
                    candidate_end = Some(end);
                    node = child.as_ref();
                }
                None => break,
            }
        }

        if let Some(end) = candidate_end {
            let id = &text[position..end];
            if tree.ids.contains(id) {
                if let Some(zone) = self.registry.zone(id) {
                    let mut pos = end;
                    let mut parsed = id.to_owned();
                    if text[pos..].starts_with('#') {
                        let mut versions = zone.available_versions();
                        versions.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
                        for version in versions {
                            if text[pos + 1..].starts_with(&version)
                                && zone.with_version(&version).is_some()
                            {
                                parsed.push('#');
                                parsed.push_str(&version);
                                pos += 1 + version.len();
                                break;
                            }
                        }
                    }
                    context.set_parsed_zone(parsed);
                    return Ok(pos);
                }
            }
        }

        // Offsets from UTC parse even when the registry has no entry for them.
        if text[position..].starts_with("UTC") {
            let after = position + 3;
            let mut nested = ParseContext::new(context.symbols());
            return match OffsetElement::bare().parse(&mut nested, text, after) {
                Ok(end) => {
                    let total = nested.parsed(&offset_seconds()).unwrap_or_default();
                    context.set_parsed_zone(utc_offset_id(total));
                    Ok(end)
                }
                Err(_) => {
                    context.set_parsed_zone("UTC");
                    Ok(after)
                }
            };
        }
        Err(position)
    }

    /// The cached tree, rebuilt when the registry's identifier set has changed size.
    fn snapshot(&self) -> Arc<IdTree> {
        let ids = self.registry.parsable_ids();
        let mut guard = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(cached) = &*guard {
            if cached.ids.len() == ids.len() {
                return Arc::clone(cached);
            }
        }
        let rebuilt = Arc::new(IdTree::build(ids));
        *guard = Some(Arc::clone(&rebuilt));
        rebuilt
    }
}

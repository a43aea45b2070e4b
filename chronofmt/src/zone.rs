//! The interface to an external time-zone database.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::locale::Locale;
use crate::text::TextStyle;

/// A single time zone from a registry.
pub trait Zone: Send + Sync {
    /// The zone's canonical identifier.
    fn id(&self) -> &str;

    /// The rule-data versions available for this zone, if the registry is versioned.
    #[inline]
    fn available_versions(&self) -> Vec<String> {
        Vec::new()
    }

    /// This zone pinned to a specific rule-data version, if that version exists.
    #[inline]
    fn with_version(&self, version: &str) -> Option<Arc<dyn Zone>> {
        let _ = version;
        None
    }

    /// The zone's display name in the given locale and style, if the registry knows one.
    #[inline]
    fn localized_name(&self, locale: &Locale, style: TextStyle) -> Option<String> {
        let _ = (locale, style);
        None
    }
}

/// A database of time zones queried while parsing zone identifiers.
pub trait ZoneRegistry: Send + Sync {
    /// Every identifier the registry can resolve.
    fn parsable_ids(&self) -> BTreeSet<String>;

    /// The zone for an identifier, if the registry can resolve it.
    fn zone(&self, id: &str) -> Option<Arc<dyn Zone>>;
}

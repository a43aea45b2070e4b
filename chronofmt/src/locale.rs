//! Locale identification.

use std::borrow::Cow;
use std::fmt;

/// An opaque locale tag.
///
/// The engine attaches no meaning to the tag beyond identity: it is the key under which
/// [`FormatSymbols`](crate::FormatSymbols) are cached and the value handed to text stores, zone
/// registries, and chronologies when they are asked for localized data. Any stable naming scheme
/// (BCP 47 tags being the obvious choice) works.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// The root locale, used when no other locale applies.
    pub const ROOT: Self = Self(Cow::Borrowed("und"));

    /// Create a locale from an owned tag.
    #[inline]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Create a locale from a static tag without allocating.
    #[inline]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// The locale's tag.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    #[inline]
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for Locale {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&'static str> for Locale {
    #[inline]
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

//! The interface to an external calendar system.

use crate::locale::Locale;

/// The length of a localized date or time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    /// The longest form, typically including zone names.
    Full,
    /// A long form.
    Long,
    /// A medium form.
    Medium,
    /// The shortest form, typically all numeric.
    Short,
}

/// A calendar system.
///
/// The engine uses a chronology for two things: naming the fields that belong to it, and
/// resolving locale-specific date and time patterns for the localized element.
pub trait Chronology: Send + Sync {
    /// The chronology's name, such as `ISO`.
    fn name(&self) -> &str;

    /// The pattern to use for the given styles in the given locale, if one is defined.
    ///
    /// At most one of the styles is `None`; the result is compiled through the ordinary pattern
    /// compiler.
    fn localized_pattern(
        &self,
        date_style: Option<FormatStyle>,
        time_style: Option<FormatStyle>,
        locale: &Locale,
    ) -> Option<String>;
}

//! Field rules and the sources they read from.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::FieldRange;
use crate::fraction::Fraction;
use crate::locale::Locale;
use crate::text::{TextStore, TextStyle};

/// A read-only source of field values.
///
/// A source is typically a date, a time, or a combination of the two, but the engine only ever
/// sees this interface. A source must not change while a single print operation reads from it.
pub trait Calendrical {
    /// The value of the field, if this source can supply it.
    fn value_of(&self, field: &FieldRef) -> Option<i64>;

    /// The identifier of this source's time zone, if it has one.
    #[inline]
    fn zone_id(&self) -> Option<String> {
        None
    }
}

/// The meta-object describing a single date-time field.
///
/// A rule defines the field's identity, its value domain, and its conversions to and from
/// decimal fractions and display text. Rules are process-wide singletons shared behind
/// [`FieldRef`] handles.
pub trait FieldRule: Send + Sync {
    /// The name of the chronology this field belongs to.
    fn chronology(&self) -> &str;

    /// The name of the field, unique within its chronology.
    fn name(&self) -> &str;

    /// The smallest value the field can take.
    fn min_value(&self) -> i64;

    /// The largest value the field can take.
    fn max_value(&self) -> i64;

    /// The smallest value the field can take given the other values in `source`.
    #[inline]
    fn min_value_for(&self, source: &dyn Calendrical) -> i64 {
        let _ = source;
        self.min_value()
    }

    /// The largest value the field can take given the other values in `source`.
    #[inline]
    fn max_value_for(&self, source: &dyn Calendrical) -> i64 {
        let _ = source;
        self.max_value()
    }

    /// Whether the bounds never vary by context.
    #[inline]
    fn is_fixed_value_set(&self) -> bool {
        true
    }

    /// The display texts for this field in the given locale and style, if any exist.
    #[inline]
    fn text_store(&self, locale: &Locale, style: TextStyle) -> Option<Arc<TextStore>> {
        let _ = (locale, style);
        None
    }
}

/// A cheaply cloneable handle to a [`FieldRule`].
///
/// Equality and hashing use the rule's identity, the pair of chronology and field name, so
/// handles created from distinct instances of the same logical rule compare equal.
#[derive(Clone)]
pub struct FieldRef(Arc<dyn FieldRule>);

impl FieldRef {
    /// Wrap a rule in a handle.
    #[inline]
    pub fn new(rule: impl FieldRule + 'static) -> Self {
        Self(Arc::new(rule))
    }

    /// Wrap an already shared rule in a handle.
    #[inline]
    pub fn from_arc(rule: Arc<dyn FieldRule>) -> Self {
        Self(rule)
    }

    /// The name of the chronology this field belongs to.
    #[inline]
    pub fn chronology(&self) -> &str {
        self.0.chronology()
    }

    /// The name of the field.
    #[inline]
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// The smallest value the field can take.
    #[inline]
    pub fn min_value(&self) -> i64 {
        self.0.min_value()
    }

    /// The largest value the field can take.
    #[inline]
    pub fn max_value(&self) -> i64 {
        self.0.max_value()
    }

    /// The smallest value the field can take given the other values in `source`.
    #[inline]
    pub fn min_value_for(&self, source: &dyn Calendrical) -> i64 {
        self.0.min_value_for(source)
    }

    /// The largest value the field can take given the other values in `source`.
    #[inline]
    pub fn max_value_for(&self, source: &dyn Calendrical) -> i64 {
        self.0.max_value_for(source)
    }

    /// Whether the bounds never vary by context.
    #[inline]
    pub fn is_fixed_value_set(&self) -> bool {
        self.0.is_fixed_value_set()
    }

    /// The display texts for this field in the given locale and style, if any exist.
    #[inline]
    pub fn text_store(&self, locale: &Locale, style: TextStyle) -> Option<Arc<TextStore>> {
        self.0.text_store(locale, style)
    }

    /// Whether the value lies within the field's fixed bounds.
    #[inline]
    pub fn is_in_range(&self, value: i64) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Validate a value against the field's fixed bounds.
    pub fn check_value(&self, value: i64) -> Result<i64, FieldRange> {
        if self.is_in_range(value) {
            Ok(value)
        } else {
            Err(FieldRange::new(
                self.name(),
                value,
                self.min_value(),
                self.max_value(),
            ))
        }
    }

    /// Convert a field value to the fraction of the field's range it represents.
    ///
    /// The value is divided by `max_value + 1`, truncated to nine decimal places. Only meaningful
    /// for fields with a fixed, zero-based value set; callers enforce that precondition when the
    /// conversion is wired into a formatter.
    pub fn int_to_fraction(&self, value: i64) -> Result<Fraction, FieldRange> {
        let value = self.check_value(value)?;
        Ok(Fraction::ratio(value, self.max_value() + 1))
    }

    /// Convert a fraction of the field's range back to a field value, truncating towards zero.
    #[inline]
    pub fn fraction_to_int(&self, fraction: Fraction) -> i64 {
        fraction.multiply_floor(self.max_value() + 1)
    }
}

impl PartialEq for FieldRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.chronology() == other.chronology() && self.name() == other.name()
    }
}

impl Eq for FieldRef {}

impl Hash for FieldRef {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chronology().hash(state);
        self.name().hash(state);
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldRef({}.{})", self.chronology(), self.name())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The one field the engine itself defines: a zone offset measured in seconds east of UTC.
///
/// The zone offset elements read from and parse into this field; sources that carry an offset
/// should answer for it in [`Calendrical::value_of`].
struct OffsetSecondsRule;

impl FieldRule for OffsetSecondsRule {
    fn chronology(&self) -> &str {
        "ISO"
    }

    fn name(&self) -> &str {
        "OffsetSeconds"
    }

    fn min_value(&self) -> i64 {
        -64_800
    }

    fn max_value(&self) -> i64 {
        64_800
    }
}

/// The engine's built-in zone-offset-in-seconds field. Values range over plus or minus eighteen
/// hours.
pub fn offset_seconds() -> FieldRef {
    static FIELD: OnceLock<FieldRef> = OnceLock::new();
    FIELD
        .get_or_init(|| FieldRef::new(OffsetSecondsRule))
        .clone()
}

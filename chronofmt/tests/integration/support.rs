//! Shared fixtures: a miniature ISO-like calendar, a value record, and a zone registry.

use std::collections::BTreeSet;
use std::sync::Arc;

use chronofmt::{
    Calendrical, Chronology, FieldRef, FieldRule, FormatStyle, Locale, PatternLetters, TextStore,
    TextStyle, Zone, ZoneRegistry,
};

/// A field rule defined entirely by data.
struct Rule {
    name: &'static str,
    min: i64,
    max: i64,
    texts: Vec<(TextStyle, Arc<TextStore>)>,
}

impl FieldRule for Rule {
    fn chronology(&self) -> &str {
        "ISO"
    }

    fn name(&self) -> &str {
        self.name
    }

    fn min_value(&self) -> i64 {
        self.min
    }

    fn max_value(&self) -> i64 {
        self.max
    }

    fn text_store(&self, _locale: &Locale, style: TextStyle) -> Option<Arc<TextStore>> {
        self.texts
            .iter()
            .find(|(candidate, _)| *candidate == style)
            .map(|(_, store)| Arc::clone(store))
    }
}

fn rule(name: &'static str, min: i64, max: i64) -> FieldRef {
    FieldRef::new(Rule {
        name,
        min,
        max,
        texts: Vec::new(),
    })
}

pub fn year() -> FieldRef {
    rule("Year", -999_999_999, 999_999_999)
}

pub fn month() -> FieldRef {
    let store = |texts: [&str; 12]| {
        Arc::new(TextStore::new(
            texts
                .iter()
                .enumerate()
                .map(|(index, text)| (index as i64 + 1, (*text).to_owned())),
        ))
    };
    FieldRef::new(Rule {
        name: "MonthOfYear",
        min: 1,
        max: 12,
        texts: vec![
            (
                TextStyle::Full,
                store([
                    "January",
                    "February",
                    "March",
                    "April",
                    "May",
                    "June",
                    "July",
                    "August",
                    "September",
                    "October",
                    "November",
                    "December",
                ]),
            ),
            (
                TextStyle::Short,
                store([
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ]),
            ),
            // Narrow forms collide, which disables matching for this style.
            (
                TextStyle::Narrow,
                store(["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"]),
            ),
        ],
    })
}

pub fn day() -> FieldRef {
    rule("DayOfMonth", 1, 31)
}

pub fn hour() -> FieldRef {
    rule("HourOfDay", 0, 23)
}

pub fn minute() -> FieldRef {
    rule("MinuteOfHour", 0, 59)
}

pub fn second() -> FieldRef {
    rule("SecondOfMinute", 0, 59)
}

pub fn milli() -> FieldRef {
    rule("MilliOfSecond", 0, 999)
}

pub fn nano() -> FieldRef {
    rule("NanoOfSecond", 0, 999_999_999)
}

pub fn am_pm() -> FieldRef {
    FieldRef::new(Rule {
        name: "AmPmOfDay",
        min: 0,
        max: 1,
        texts: vec![
            (
                TextStyle::Full,
                Arc::new(TextStore::new([(0, "AM".to_owned()), (1, "PM".to_owned())])),
            ),
            (
                TextStyle::Short,
                Arc::new(TextStore::new([(0, "AM".to_owned()), (1, "PM".to_owned())])),
            ),
        ],
    })
}

/// The letter table every pattern test compiles against.
pub fn letters() -> PatternLetters {
    PatternLetters::new()
        .with_rule('y', year())
        .with_rule('M', month())
        .with_rule('d', day())
        .with_rule('H', hour())
        .with_rule('m', minute())
        .with_rule('s', second())
        .with_rule('S', milli())
        .with_rule('n', nano())
        .with_rule('a', am_pm())
        .with_zone_registry(registry())
}

/// An in-memory calendrical source.
#[derive(Default)]
pub struct Record {
    values: Vec<(FieldRef, i64)>,
    zone: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldRef, value: i64) -> Self {
        self.values.push((field, value));
        self
    }

    pub fn with_zone(mut self, id: &str) -> Self {
        self.zone = Some(id.to_owned());
        self
    }
}

impl Calendrical for Record {
    fn value_of(&self, field: &FieldRef) -> Option<i64> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == field)
            .map(|(_, value)| *value)
    }

    fn zone_id(&self) -> Option<String> {
        self.zone.clone()
    }
}

/// A record holding 2009-06-03 12:34:56.789.
pub fn sample_date_time() -> Record {
    Record::new()
        .with(year(), 2009)
        .with(month(), 6)
        .with(day(), 3)
        .with(hour(), 12)
        .with(minute(), 34)
        .with(second(), 56)
        .with(milli(), 789)
}

struct TestZone {
    id: String,
    versions: Vec<&'static str>,
}

impl Zone for TestZone {
    fn id(&self) -> &str {
        &self.id
    }

    fn available_versions(&self) -> Vec<String> {
        self.versions.iter().map(|version| (*version).to_owned()).collect()
    }

    fn with_version(&self, version: &str) -> Option<Arc<dyn Zone>> {
        self.versions.contains(&version).then(|| {
            Arc::new(TestZone {
                id: format!("{}#{version}", self.id),
                versions: Vec::new(),
            }) as Arc<dyn Zone>
        })
    }

    fn localized_name(&self, _locale: &Locale, style: TextStyle) -> Option<String> {
        (self.id == "Europe/Paris").then(|| match style {
            TextStyle::Full => "Central European Time".to_owned(),
            _ => "CET".to_owned(),
        })
    }
}

struct TestRegistry;

/// Deliberately excludes a plain `UTC` entry so the offset fast path is reachable.
const ZONE_IDS: [&str; 7] = [
    "Foo",
    "FooBar",
    "Asia/Tokyo",
    "Europe/Paris",
    "Europe/London",
    "America/New_York",
    "Australia/Darwin",
];

impl ZoneRegistry for TestRegistry {
    fn parsable_ids(&self) -> BTreeSet<String> {
        ZONE_IDS.iter().map(|id| (*id).to_owned()).collect()
    }

    fn zone(&self, id: &str) -> Option<Arc<dyn Zone>> {
        ZONE_IDS.contains(&id).then(|| {
            Arc::new(TestZone {
                id: id.to_owned(),
                versions: if id == "Europe/Paris" {
                    vec!["2009", "2009b"]
                } else {
                    Vec::new()
                },
            }) as Arc<dyn Zone>
        })
    }
}

pub fn registry() -> Arc<dyn ZoneRegistry> {
    Arc::new(TestRegistry)
}

/// A chronology resolving localized patterns for the localized element.
pub struct TestChronology;

impl Chronology for TestChronology {
    fn name(&self) -> &str {
        "ISO"
    }

    fn localized_pattern(
        &self,
        date_style: Option<FormatStyle>,
        time_style: Option<FormatStyle>,
        _locale: &Locale,
    ) -> Option<String> {
        match (date_style, time_style) {
            (Some(_), Some(_)) => Some("yyyy-MM-dd HH:mm".to_owned()),
            (Some(_), None) => Some("yyyy-MM-dd".to_owned()),
            (None, Some(_)) => Some("HH:mm".to_owned()),
            (None, None) => None,
        }
    }
}

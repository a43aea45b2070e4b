use chronofmt::error::Parse;
use chronofmt::{FormatterBuilder, Locale};

use crate::support::{self, Record};

#[test]
fn char_literal_round_trips() {
    let mut builder = FormatterBuilder::new();
    builder
        .append_value_fixed(support::month(), 2)
        .append_literal('-')
        .append_value_fixed(support::day(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::month(), 6).with(support::day(), 3);
    assert_eq!(formatter.format(&record).unwrap(), "06-03");

    let parsed = formatter.parse("06-03").unwrap();
    assert_eq!(parsed.value_of(&support::day()), Some(3));

    assert_eq!(
        formatter.parse("06x03").unwrap_err(),
        Parse::UnexpectedText { index: 2 },
    );
}

#[test]
fn str_literal_round_trips() {
    let mut builder = FormatterBuilder::new();
    builder
        .append_literal_str("at ")
        .append_value_fixed(support::hour(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::hour(), 12);
    assert_eq!(formatter.format(&record).unwrap(), "at 12");

    let parsed = formatter.parse("at 12").unwrap();
    assert_eq!(parsed.value_of(&support::hour()), Some(12));

    assert_eq!(
        formatter.parse("At 12").unwrap_err(),
        Parse::UnexpectedText { index: 0 },
    );
}

#[test]
fn empty_str_literal_is_a_no_op() {
    let mut builder = FormatterBuilder::new();
    builder.append_literal_str("");
    let formatter = builder.into_formatter(Locale::ROOT);
    assert_eq!(formatter.format(&Record::new()).unwrap(), "");
}

#[test]
fn case_insensitive_literals() {
    let mut builder = FormatterBuilder::new();
    builder
        .parse_case_insensitive()
        .append_literal_str("GMT")
        .append_literal('Z');
    let formatter = builder.into_formatter(Locale::ROOT);

    let parsed = formatter.parse("gmtz").unwrap();
    assert_eq!(parsed.position(), 4);
}

#[test]
fn pad_prints_leading_fill() {
    let mut builder = FormatterBuilder::new();
    builder.pad_next(3).append_value_fixed(support::month(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::month(), 6);
    assert_eq!(formatter.format(&record).unwrap(), " 06");
}

#[test]
fn pad_with_custom_character() {
    let mut builder = FormatterBuilder::new();
    builder
        .pad_next_with(4, '*')
        .append_value_fixed(support::month(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::month(), 6);
    assert_eq!(formatter.format(&record).unwrap(), "**06");
}

#[test]
fn pad_rejects_oversized_output() {
    let mut builder = FormatterBuilder::new();
    builder.pad_next(2).append_value_fixed(support::year(), 4);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::year(), 2009);
    assert!(matches!(
        formatter.format(&record),
        Err(chronofmt::error::Print::ExceedsPadWidth { width: 2 })
    ));
}

#[test]
fn pad_parse_strips_leading_fill() {
    let mut builder = FormatterBuilder::new();
    builder.pad_next(3).append_value_fixed(support::day(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    let parsed = formatter.parse(" 06").unwrap();
    assert_eq!(parsed.value_of(&support::day()), Some(6));
    assert_eq!(parsed.position(), 3);
}

#[test]
fn pad_parse_requires_the_full_window() {
    let mut builder = FormatterBuilder::new();
    builder.pad_next(3).append_value_fixed(support::day(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    assert_eq!(
        formatter.parse("06").unwrap_err(),
        Parse::UnexpectedText { index: 0 },
    );
}

#[test]
fn pad_parse_leaves_unused_window_chars() {
    let mut builder = FormatterBuilder::new();
    builder.pad_next(3).append_value_fixed(support::day(), 2);
    let formatter = builder.into_formatter(Locale::ROOT);

    // The inner parser consumes two of the three window characters; the rest of the input is
    // left for later elements.
    let parsed = formatter.parse("06x").unwrap();
    assert_eq!(parsed.value_of(&support::day()), Some(6));
    assert_eq!(parsed.position(), 2);
}

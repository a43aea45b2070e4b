use chronofmt::error::{Error, InvalidPattern, Parse};

use crate::support;

#[test]
fn field_range_carries_its_payload() {
    let error = support::month().check_value(13).unwrap_err();
    assert_eq!(error.name(), "MonthOfYear");
    assert_eq!(error.value(), 13);
    assert_eq!(error.minimum(), 1);
    assert_eq!(error.maximum(), 12);
    assert_eq!(
        error.to_string(),
        "MonthOfYear must be in the range 1..=12, but was 13",
    );
}

#[test]
fn check_value_accepts_in_range_values() {
    assert_eq!(support::month().check_value(12), Ok(12));
}

#[test]
fn parse_error_reports_its_index() {
    let error = Parse::UnexpectedText { index: 7 };
    assert_eq!(error.index(), Some(7));
    assert_eq!(error.to_string(), "the input could not be parsed at index 7");
    assert_eq!(Parse::NotParseable.index(), None);
}

#[test]
fn invalid_pattern_messages_name_the_index() {
    assert_eq!(
        InvalidPattern::UnmatchedClosingBracket { index: 4 }.to_string(),
        "']' at index 4 has no matching '['",
    );
    assert_eq!(
        InvalidPattern::UnterminatedLiteral { index: 0 }.to_string(),
        "the string literal opened at index 0 is never closed",
    );
}

#[test]
fn everything_converts_into_the_unified_error() {
    let range = support::month().check_value(0).unwrap_err();
    let unified = Error::from(range.clone());
    assert_eq!(unified, Error::FieldRange(range));
    assert_eq!(unified.to_string(), "MonthOfYear must be in the range 1..=12, but was 0");

    let parse = Parse::UnexpectedText { index: 3 };
    assert_eq!(Error::from(parse), Error::Parse(parse));

    let pattern = InvalidPattern::PadWithoutTarget { index: 1 };
    assert_eq!(Error::from(pattern), Error::InvalidPattern(pattern));
}

#[test]
fn errors_expose_their_sources() {
    use std::error::Error as _;

    let range = support::month().check_value(0).unwrap_err();
    let unified = Error::from(range);
    assert!(unified.source().is_some());
}

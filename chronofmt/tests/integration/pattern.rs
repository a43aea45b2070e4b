use chronofmt::error::{InvalidPattern, Parse};
use chronofmt::{Formatter, FormatterBuilder, Locale, PatternLetters};
use rstest::rstest;

use crate::support::{self, Record};

fn pattern(pattern: &str) -> Formatter {
    Formatter::of_pattern(pattern, &support::letters(), Locale::ROOT).unwrap()
}

fn year_record(value: i64) -> Record {
    Record::new().with(support::year(), value)
}

#[test]
fn date_pattern_round_trips() {
    let formatter = pattern("yyyy-MM-dd");
    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "2009-06-03");

    let parsed = formatter.parse("2009-06-03").unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2009));
    assert_eq!(parsed.value_of(&support::month()), Some(6));
    assert_eq!(parsed.value_of(&support::day()), Some(3));
}

#[test]
fn time_pattern_with_fraction_round_trips() {
    let formatter = pattern("HHmmssfSSS");
    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "123456.789");

    let parsed = formatter.parse("123456.789").unwrap();
    assert_eq!(parsed.value_of(&support::hour()), Some(12));
    assert_eq!(parsed.value_of(&support::minute()), Some(34));
    assert_eq!(parsed.value_of(&support::second()), Some(56));
    assert_eq!(parsed.value_of(&support::milli()), Some(789));

    // The required fraction prefix is missing after the six time digits.
    assert_eq!(
        formatter.parse("12345612").unwrap_err(),
        Parse::UnexpectedText { index: 6 },
    );
}

#[test]
fn undelimited_patterns_parse_adjacently() {
    let formatter = pattern("yyyyMMdd");
    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "20090603");

    let parsed = formatter.parse("20090603").unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2009));
    assert_eq!(parsed.value_of(&support::month()), Some(6));
    assert_eq!(parsed.value_of(&support::day()), Some(3));
}

#[test]
fn optional_sections_in_patterns() {
    let formatter = pattern("yyyy[-MM[-dd]]");

    assert_eq!(formatter.parse("2009").unwrap().position(), 4);

    let parsed = formatter.parse("2009-06").unwrap();
    assert_eq!(parsed.value_of(&support::month()), Some(6));
    assert_eq!(parsed.position(), 7);

    let parsed = formatter.parse("2009-06-0X").unwrap();
    assert_eq!(parsed.value_of(&support::month()), Some(6));
    assert_eq!(parsed.value_of(&support::day()), None);
    assert_eq!(parsed.position(), 7);
}

#[rstest]
#[case("y", 2009, "2009")]
#[case("yy", 2009, "09")]
#[case("yyy", 2009, "2009")]
#[case("yyyyy", 2009, "02009")]
#[case("yyyyy", 123_456, "+123456")]
fn year_letter_forms(#[case] pattern_text: &str, #[case] year: i64, #[case] expected: &str) {
    let formatter = pattern(pattern_text);
    assert_eq!(formatter.format(&year_record(year)).unwrap(), expected);
}

#[test]
fn two_letter_years_are_reduced() {
    let formatter = pattern("yy");
    let parsed = formatter.parse("12").unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2012));
    let parsed = formatter.parse("99").unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2099));
}

#[rstest]
#[case("M", "6")]
#[case("MM", "06")]
#[case("MMM", "Jun")]
#[case("MMMM", "June")]
fn month_letter_forms(#[case] pattern_text: &str, #[case] expected: &str) {
    let formatter = pattern(pattern_text);
    let record = Record::new().with(support::month(), 6);
    assert_eq!(formatter.format(&record).unwrap(), expected);
}

#[rstest]
#[case("a", 1, "PM")]
#[case("aaaa", 0, "AM")]
fn am_pm_letter_forms(#[case] pattern_text: &str, #[case] value: i64, #[case] expected: &str) {
    let formatter = pattern(pattern_text);
    let record = Record::new().with(support::am_pm(), value);
    assert_eq!(formatter.format(&record).unwrap(), expected);
}

#[test]
fn fraction_modifier_with_open_maximum() {
    let formatter = pattern("ffSSS");
    let record = Record::new().with(support::milli(), 790);
    // Two or more `f` letters open the maximum width up to nine.
    assert_eq!(formatter.format(&record).unwrap(), ".790");

    let parsed = formatter.parse(".790123").unwrap();
    assert_eq!(parsed.position(), 7);
}

#[test]
fn pad_modifier_pads_the_next_element() {
    let formatter = pattern("pppMM");
    let record = Record::new().with(support::month(), 6);
    assert_eq!(formatter.format(&record).unwrap(), " 06");

    let parsed = formatter.parse(" 06").unwrap();
    assert_eq!(parsed.value_of(&support::month()), Some(6));
}

#[test]
fn unrecognized_letters_become_literals() {
    let formatter = pattern("Qyyyy");
    assert_eq!(formatter.format(&year_record(2009)).unwrap(), "Q2009");

    let parsed = formatter.parse("Q2009").unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2009));
}

#[test]
fn quoted_literals_and_escapes() {
    let formatter = pattern("'Year 'yyyy");
    assert_eq!(formatter.format(&year_record(2009)).unwrap(), "Year 2009");

    let formatter = pattern("yyyy''");
    assert_eq!(formatter.format(&year_record(2009)).unwrap(), "2009'");

    let formatter = pattern("'o''clock'");
    assert_eq!(formatter.format(&Record::new()).unwrap(), "o'clock");
}

#[test]
fn zone_letters() {
    let record = Record::new().with_zone("Europe/Paris");

    let formatter = pattern("I");
    assert_eq!(formatter.format(&record).unwrap(), "Europe/Paris");
    let parsed = formatter.parse("Europe/Paris").unwrap();
    assert_eq!(parsed.zone_id(), Some("Europe/Paris"));

    let formatter = pattern("z");
    assert_eq!(formatter.format(&record).unwrap(), "CET");

    let formatter = pattern("zzzz");
    assert_eq!(formatter.format(&record).unwrap(), "Central European Time");
}

#[rstest]
#[case("Z", 0, "+0000")]
#[case("Z", 5_400, "+0130")]
#[case("ZZ", 5_400, "+01:30")]
#[case("ZZ", 0, "+00:00")]
#[case("ZZZ", 5_415, "+013015")]
#[case("ZZZ", 0, "Z")]
#[case("ZZZZ", 5_415, "+01:30:15")]
#[case("ZZZZ", 0, "Z")]
fn offset_letter_forms(#[case] pattern_text: &str, #[case] total: i64, #[case] expected: &str) {
    let formatter = pattern(pattern_text);
    let record = Record::new().with(chronofmt::offset_seconds(), total);
    assert_eq!(formatter.format(&record).unwrap(), expected);
}

#[rstest]
#[case("p", InvalidPattern::PadWithoutTarget { index: 0 })]
#[case("p-", InvalidPattern::PadWithoutTarget { index: 0 })]
#[case("yyyy-p", InvalidPattern::PadWithoutTarget { index: 5 })]
#[case("f", InvalidPattern::FractionWithoutTarget { index: 0 })]
#[case("fy", InvalidPattern::FractionWithoutTarget { index: 1 })]
#[case("'abc", InvalidPattern::UnterminatedLiteral { index: 0 })]
#[case("yyyy]", InvalidPattern::UnmatchedClosingBracket { index: 4 })]
#[case("yyyyyyyyyyy", InvalidPattern::InvalidCount { letter: 'y', count: 11, index: 0 })]
#[case("ddddddddddd", InvalidPattern::InvalidCount { letter: 'd', count: 11, index: 0 })]
fn structural_errors(#[case] pattern_text: &str, #[case] expected: InvalidPattern) {
    let mut builder = FormatterBuilder::new();
    assert_eq!(
        builder
            .append_pattern(pattern_text, &support::letters())
            .unwrap_err(),
        expected,
    );
}

#[test]
fn zone_letters_need_a_registry() {
    let letters = PatternLetters::new().with_rule('y', support::year());
    let mut builder = FormatterBuilder::new();
    assert_eq!(
        builder.append_pattern("I", &letters).unwrap_err(),
        InvalidPattern::NoZoneRegistry { index: 0 },
    );
}

#[test]
fn unclosed_optional_sections_are_valid() {
    let formatter = pattern("yyyy[-MM");
    let parsed = formatter.parse("2009-06").unwrap();
    assert_eq!(parsed.value_of(&support::month()), Some(6));
    assert_eq!(formatter.parse("2009").unwrap().position(), 4);
}

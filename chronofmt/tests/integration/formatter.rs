use std::sync::Arc;

use chronofmt::error::{Parse, Print};
use chronofmt::{
    Calendrical, DateTimeParser, DateTimePrinter, FormatSymbols, Formatter, FormatterBuilder,
    FormatStyle, Locale, ParseContext, ParseResult,
};

use crate::support::{self, Record, TestChronology};

#[test]
fn parse_at_starts_mid_input() {
    let formatter = Formatter::of_pattern("yyyy", &support::letters(), Locale::ROOT).unwrap();
    let parsed = formatter.parse_at("xx2009", 2).unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2009));
    assert_eq!(parsed.position(), 6);
}

#[test]
#[should_panic = "character boundary"]
fn parse_at_rejects_positions_past_the_end() {
    let formatter = Formatter::of_pattern("yyyy", &support::letters(), Locale::ROOT).unwrap();
    let _ = formatter.parse_at("2009", 5);
}

#[test]
fn with_locale_shares_the_pipeline() {
    let formatter = Formatter::of_pattern("yyyy", &support::letters(), Locale::ROOT).unwrap();
    let relocated = formatter.with_locale(Locale::from_static("en-GB"));
    assert_eq!(relocated.locale().tag(), "en-GB");
    assert_eq!(formatter.locale(), &Locale::ROOT);

    let record = Record::new().with(support::year(), 2009);
    assert_eq!(relocated.format(&record).unwrap(), "2009");
}

#[test]
fn registered_symbols_internationalize_digits() {
    // Arabic-Indic digits; the ten code points from U+0660 are contiguous.
    let locale = Locale::from_static("test-arabic-digits");
    FormatSymbols::register(FormatSymbols::new(locale.clone(), '\u{660}', '+', '-', '.'));

    let formatter = Formatter::of_pattern("yyyy", &support::letters(), locale).unwrap();
    let record = Record::new().with(support::year(), 2009);
    let printed = formatter.format(&record).unwrap();
    assert_eq!(printed, "\u{662}\u{660}\u{660}\u{669}");

    let parsed = formatter.parse(&printed).unwrap();
    assert_eq!(parsed.value_of(&support::year()), Some(2009));

    // ASCII digits are not digits of that numbering system.
    assert_eq!(
        formatter.parse("2009").unwrap_err(),
        Parse::UnexpectedText { index: 0 },
    );
}

#[test]
fn parsed_output_prints_back() {
    let formatter =
        Formatter::of_pattern("yyyy-MM-dd", &support::letters(), Locale::ROOT).unwrap();
    let parsed = formatter.parse("2009-06-03").unwrap();
    assert_eq!(formatter.format(&parsed).unwrap(), "2009-06-03");
}

#[test]
fn parsed_zone_prints_back() {
    let formatter = Formatter::of_pattern("I", &support::letters(), Locale::ROOT).unwrap();
    let parsed = formatter.parse("Europe/Paris").unwrap();
    assert_eq!(parsed.zone_id(), Some("Europe/Paris"));
    assert_eq!(formatter.format(&parsed).unwrap(), "Europe/Paris");
}

#[test]
fn parsed_offset_prints_back() {
    let formatter = Formatter::of_pattern("ZZZZ", &support::letters(), Locale::ROOT).unwrap();
    let parsed = formatter.parse("+01:30").unwrap();
    assert_eq!(parsed.value_of(&chronofmt::offset_seconds()), Some(5_400));
    assert_eq!(formatter.format(&parsed).unwrap(), "+01:30");
}

#[test]
fn append_formatter_inlines_the_pipeline() {
    let time = Formatter::of_pattern("HH:mm", &support::letters(), Locale::ROOT).unwrap();

    let mut builder = FormatterBuilder::new();
    builder
        .append_pattern("yyyy-MM-dd", &support::letters())
        .unwrap()
        .append_literal(' ')
        .append_formatter(&time);
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "2009-06-03 12:34");
}

struct Exclaim;

impl DateTimePrinter for Exclaim {
    fn print(
        &self,
        _source: &dyn Calendrical,
        output: &mut String,
        _symbols: &FormatSymbols,
    ) -> Result<(), Print> {
        output.push('!');
        Ok(())
    }
}

impl DateTimeParser for Exclaim {
    fn parse(&self, _context: &mut ParseContext<'_>, text: &str, position: usize) -> ParseResult {
        if text[position..].starts_with('!') {
            Ok(position + 1)
        } else {
            Err(position)
        }
    }
}

#[test]
fn custom_elements_take_part_in_the_pipeline() {
    let mut builder = FormatterBuilder::new();
    builder
        .append_value_fixed(support::hour(), 2)
        .append_custom(Some(Arc::new(Exclaim)), Some(Arc::new(Exclaim)));
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = Record::new().with(support::hour(), 12);
    assert_eq!(formatter.format(&record).unwrap(), "12!");

    let parsed = formatter.parse("12!").unwrap();
    assert_eq!(parsed.position(), 3);
    assert_eq!(
        formatter.parse("12?").unwrap_err(),
        Parse::UnexpectedText { index: 2 },
    );
}

#[test]
fn a_parser_only_pipeline_cannot_print() {
    let mut builder = FormatterBuilder::new();
    builder.append_custom(None, Some(Arc::new(Exclaim)));
    let formatter = builder.into_formatter(Locale::ROOT);

    assert!(!formatter.is_printer());
    assert!(formatter.is_parser());
    assert!(matches!(
        formatter.format(&Record::new()),
        Err(Print::NotPrintable)
    ));
}

#[test]
fn a_printer_only_pipeline_cannot_parse() {
    let mut builder = FormatterBuilder::new();
    builder.append_custom(Some(Arc::new(Exclaim)), None);
    let formatter = builder.into_formatter(Locale::ROOT);

    assert!(formatter.is_printer());
    assert!(!formatter.is_parser());
    assert_eq!(formatter.parse("!").unwrap_err(), Parse::NotParseable);
}

#[test]
fn localized_elements_resolve_through_the_chronology() {
    let mut builder = FormatterBuilder::new();
    builder.append_localized(
        Some(FormatStyle::Short),
        None,
        Arc::new(TestChronology),
        &support::letters(),
    );
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "2009-06-03");

    let parsed = formatter.parse("2009-06-03").unwrap();
    assert_eq!(parsed.value_of(&support::day()), Some(3));
}

#[test]
fn localized_elements_combine_date_and_time() {
    let mut builder = FormatterBuilder::new();
    builder.append_localized(
        Some(FormatStyle::Medium),
        Some(FormatStyle::Short),
        Arc::new(TestChronology),
        &support::letters(),
    );
    let formatter = builder.into_formatter(Locale::ROOT);

    let record = support::sample_date_time();
    assert_eq!(formatter.format(&record).unwrap(), "2009-06-03 12:34");
}

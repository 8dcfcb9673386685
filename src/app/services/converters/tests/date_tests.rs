//! Tests for the multi-pattern date converter

use super::super::{DateConverter, KKeyValueConverter};
use super::local;
use crate::app::models::KKeyValue;

fn parse(text: &str) -> KKeyValue {
    DateConverter.parse(text).unwrap().unwrap()
}

#[test]
fn test_all_date_orders_and_separators() {
    let expected = KKeyValue::Date(local(2023, 7, 4, 12, 30, 0));

    for text in [
        "04.07.2023/12:30:00",
        "4.7.2023/12:30",
        "4.7.23/12:30:00",
        "07/04/2023/12:30",
        "7/4/23/12:30:00",
        "2023-07-04/12:30",
        "23-7-4/12:30:00",
        "04.07.2023 12:30:00",
        "7/4/2023 12:30",
        "2023-7-4 12:30",
        "04.07.2023.12:30:00",
        "2023-07-04.12:30",
        "2023-07-04T12:30:00",
    ] {
        assert_eq!(parse(text), expected, "{}", text);
    }
}

#[test]
fn test_seconds_default_to_zero() {
    assert_eq!(parse("1.2.2024/8:05"), KKeyValue::Date(local(2024, 2, 1, 8, 5, 0)));
}

#[test]
fn test_output_format() {
    let formatted = DateConverter
        .format(&parse("2023-07-04/12:30"))
        .unwrap()
        .unwrap();
    assert_eq!(formatted, "04.07.2023/12:30:00");
}

#[test]
fn test_offset_input_is_an_instant() {
    let value = parse("2023-07-04T12:30:00+00:00");
    let date = value.as_date().unwrap();
    assert_eq!(date.timestamp(), 1_688_473_800);
}

#[test]
fn test_offset_input_without_seconds() {
    let expected = 1_688_466_600;

    for text in [
        "2023-07-04T12:30+02:00",
        "2023-07-04T12:30:00+02:00",
        "2023-07-04T12:30:00.000+02:00",
        "2023-07-04T10:30Z",
    ] {
        let value = parse(text);
        assert_eq!(value.as_date().unwrap().timestamp(), expected, "{}", text);
    }
}

#[test]
fn test_fractional_seconds_need_seconds() {
    let value = parse("2023-07-04T12:30:00.5");
    assert_eq!(value.as_date().unwrap().timestamp_subsec_millis(), 500);
    assert!(DateConverter.parse("2023-07-04T12:30.5").is_err());
    assert!(DateConverter.parse("2023-07-04T12:30.5+02:00").is_err());
}

#[test]
fn test_invalid_dates_are_rejected() {
    assert!(DateConverter.parse("31.02.2023/12:00:00").is_err());
    assert!(DateConverter.parse("04.07.2023").is_err());
    assert!(DateConverter.parse("yesterday").is_err());
    assert_eq!(DateConverter.parse("").unwrap(), None);
}

//! Range grammar tests: year / month / day bounds and malformed input.

mod common;

use common::d;
use postwatch::utils::date::parse_range;

#[test]
fn year_expands_to_first_and_last_day() {
    assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
}

#[test]
fn month_expands_to_its_calendar_bounds() {
    assert_eq!(parse_range("2025-09").unwrap(), (d("2025-09-01"), d("2025-09-30")));
    // leap February
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
}

#[test]
fn single_day_is_its_own_interval() {
    assert_eq!(
        parse_range("2025-09-01").unwrap(),
        (d("2025-09-01"), d("2025-09-01"))
    );
}

#[test]
fn interval_spans_start_of_first_to_end_of_last() {
    assert_eq!(
        parse_range("2025-08:2025-09").unwrap(),
        (d("2025-08-01"), d("2025-09-30"))
    );
}

#[test]
fn mixed_bound_formats_are_rejected() {
    assert!(parse_range("2025:2025-09").is_err());
}

#[test]
fn garbage_input_is_an_error_not_a_panic() {
    // multibyte strings whose byte length mimics a valid shape
    assert!(parse_range("aééé").is_err());
    assert!(parse_range("éé").is_err());
    assert!(parse_range("2025-0é").is_err());
    assert!(parse_range("").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("09-2025").is_err());
}

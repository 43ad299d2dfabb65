//! Classification table tests: one pair against the post's time windows.

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{d, test_config};
use postwatch::core::classify::classify_pair;
use postwatch::core::pairs::Pair;
use postwatch::core::policy::PolicySet;
use postwatch::models::shift::{ShiftStatus, Slot};

fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap())
}

fn pair(post: &str, check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> Pair {
    Pair {
        employee_id: "A123".to_string(),
        post_id: post.to_string(),
        date: d("2025-09-01"),
        check_in,
        check_out,
    }
}

#[test]
fn both_sides_absent_is_missing_both_with_zero_hours() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair("Gate", None, None);
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::None);
    assert_eq!(r.status, ShiftStatus::MissingBoth);
    assert_eq!(r.hours, 0.0);
}

#[test]
fn check_in_only_is_missing_checkout() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair("Gate", Some(ts("2025-09-01", "06:10")), None);
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::None);
    assert_eq!(r.status, ShiftStatus::MissingCheckout);
    assert_eq!(r.hours, 0.0);
}

#[test]
fn check_out_only_is_missing_checkin() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair("Gate", None, Some(ts("2025-09-01", "14:00")));
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.status, ShiftStatus::MissingCheckin);
}

#[test]
fn full_day_on_regular_post_is_a_regular_double() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Gate",
        Some(ts("2025-09-01", "06:00")),
        Some(ts("2025-09-01", "21:30")),
    );
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::Double);
    assert_eq!(r.status, ShiftStatus::Ok);
    assert_eq!(r.hours, 15.25);
}

#[test]
fn full_day_on_command_post_uses_the_command_total() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Command",
        Some(ts("2025-09-01", "06:30")),
        Some(ts("2025-09-01", "21:00")),
    );
    let r = classify_pair(&p, policies.for_post("Command"));
    assert_eq!(r.slot, Slot::Double);
    assert_eq!(r.hours, 16.25);
}

#[test]
fn morning_shift_within_windows() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Gate",
        Some(ts("2025-09-01", "06:00")),
        Some(ts("2025-09-01", "14:00")),
    );
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::Morning);
    assert_eq!(r.status, ShiftStatus::Ok);
    assert_eq!(r.hours, 7.5);
}

#[test]
fn afternoon_shift_within_windows() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Gate",
        Some(ts("2025-09-01", "13:30")),
        Some(ts("2025-09-01", "21:30")),
    );
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::Afternoon);
    assert_eq!(r.hours, 7.5);
}

#[test]
fn overnight_double_on_command_post_is_valid() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Command",
        Some(ts("2025-09-01", "06:30")),
        Some(ts("2025-09-02", "01:30")),
    );
    let r = classify_pair(&p, policies.for_post("Command"));
    assert_eq!(r.slot, Slot::Double);
    assert_eq!(r.status, ShiftStatus::Ok);
    assert_eq!(r.hours, 16.25);
}

#[test]
fn overnight_checkout_on_regular_post_is_invalid() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Gate",
        Some(ts("2025-09-01", "06:30")),
        Some(ts("2025-09-02", "01:30")),
    );
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::None);
    assert_eq!(r.status, ShiftStatus::InvalidTimes);
    assert_eq!(r.hours, 0.0);
}

#[test]
fn overnight_checkout_past_the_cutoff_is_invalid_even_on_command() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Command",
        Some(ts("2025-09-01", "06:30")),
        Some(ts("2025-09-02", "03:00")),
    );
    let r = classify_pair(&p, policies.for_post("Command"));
    assert_eq!(r.status, ShiftStatus::InvalidTimes);
}

#[test]
fn checkout_below_checkin_time_of_day_is_read_as_next_day() {
    // Same stored date, but 01:30 < 06:30 means the scan crossed midnight.
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Command",
        Some(ts("2025-09-01", "06:30")),
        Some(ts("2025-09-01", "01:30")),
    );
    let r = classify_pair(&p, policies.for_post("Command"));
    assert_eq!(r.slot, Slot::Double);
    assert_eq!(r.status, ShiftStatus::Ok);
}

#[test]
fn times_matching_no_window_are_invalid_not_dropped() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Gate",
        Some(ts("2025-09-01", "08:00")),
        Some(ts("2025-09-01", "12:00")),
    );
    let r = classify_pair(&p, policies.for_post("Gate"));
    assert_eq!(r.slot, Slot::None);
    assert_eq!(r.status, ShiftStatus::InvalidTimes);
    assert!(r.detail.contains("A123"));
}

#[test]
fn unknown_post_falls_back_to_the_regular_profile() {
    let policies = PolicySet::from_config(&test_config());
    let p = pair(
        "Pier9",
        Some(ts("2025-09-01", "06:00")),
        Some(ts("2025-09-01", "21:30")),
    );
    let r = classify_pair(&p, policies.for_post("Pier9"));
    assert_eq!(r.hours, 15.25);
}

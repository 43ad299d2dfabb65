//! WeekAggregator tests: Monday anchoring, totals, no-coverage marker.

mod common;

use common::{d, scan, test_config};
use postwatch::core::day::summarize_day;
use postwatch::core::policy::PolicySet;
use postwatch::core::week::{build_week_matrix, monday_of, week_dates};
use postwatch::models::action::Action::{CheckIn, CheckOut};
use postwatch::models::report::WeekCell;

#[test]
fn monday_of_anchors_any_weekday_to_the_monday_before() {
    assert_eq!(monday_of(d("2025-09-03")), d("2025-09-01")); // Wednesday
    assert_eq!(monday_of(d("2025-09-01")), d("2025-09-01")); // Monday itself
    assert_eq!(monday_of(d("2025-09-07")), d("2025-09-01")); // Sunday
}

#[test]
fn week_has_seven_consecutive_dates() {
    let dates = week_dates(d("2025-09-03"));
    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0], d("2025-09-01"));
    assert_eq!(dates[6], d("2025-09-07"));
}

#[test]
fn weekly_total_equals_the_sum_of_the_day_totals() {
    let policies = PolicySet::from_config(&test_config());
    let events = vec![
        // Monday: morning only
        scan("A123", "Gate", CheckIn, "2025-09-01", "06:00"),
        scan("A123", "Gate", CheckOut, "2025-09-01", "14:00"),
        // Tuesday: full double
        scan("A123", "Gate", CheckIn, "2025-09-02", "06:00"),
        scan("A123", "Gate", CheckOut, "2025-09-02", "21:30"),
        // Thursday: afternoon only
        scan("B456", "Gate", CheckIn, "2025-09-04", "13:30"),
        scan("B456", "Gate", CheckOut, "2025-09-04", "21:30"),
    ];

    let matrix = build_week_matrix(d("2025-09-03"), &events, &policies);
    let row = matrix.row("Gate").expect("Gate row");

    let day_sum: f64 = matrix
        .dates
        .iter()
        .map(|date| summarize_day("Gate", *date, &events, &policies).total_hours)
        .sum();

    assert_eq!(row.weekly_total, day_sum);
    assert_eq!(row.weekly_total, 7.5 + 15.25 + 7.5);
}

#[test]
fn no_coverage_is_not_the_same_as_a_recorded_zero() {
    let policies = PolicySet::from_config(&test_config());
    let events = vec![
        // Monday: a lone check-in classifies to zero hours but IS coverage data
        scan("A123", "Gate", CheckIn, "2025-09-01", "06:10"),
    ];

    let matrix = build_week_matrix(d("2025-09-01"), &events, &policies);
    let row = matrix.row("Gate").expect("Gate row");

    assert_eq!(row.cells[0], WeekCell::Hours(0.0));
    for cell in &row.cells[1..] {
        assert_eq!(*cell, WeekCell::NoCoverage);
    }
    assert_eq!(row.weekly_total, 0.0);
}

#[test]
fn matrix_has_one_row_per_configured_post_in_roster_order() {
    let cfg = test_config();
    let policies = PolicySet::from_config(&cfg);
    let matrix = build_week_matrix(d("2025-09-01"), &[], &policies);

    assert_eq!(matrix.rows.len(), cfg.posts.len());
    for (row, post) in matrix.rows.iter().zip(cfg.posts.iter()) {
        assert_eq!(row.post_id, post.code);
        assert_eq!(row.cells.len(), 7);
    }
}

#[test]
fn sunday_overnight_checkout_stays_in_the_same_week() {
    let policies = PolicySet::from_config(&test_config());
    let events = vec![
        scan("A123", "Command", CheckIn, "2025-09-07", "06:30"),
        // scanned Monday 01:30, belongs to Sunday's business day
        scan("A123", "Command", CheckOut, "2025-09-08", "01:30"),
    ];

    let matrix = build_week_matrix(d("2025-09-01"), &events, &policies);
    let row = matrix.row("Command").expect("Command row");
    assert_eq!(row.cells[6], WeekCell::Hours(16.25));
    assert_eq!(row.weekly_total, 16.25);
}

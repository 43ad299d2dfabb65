//! WeekAggregator: run the day aggregation for every configured post over a
//! Monday-based 7-day window and project the hour totals into a matrix.

use crate::core::day::summarize_day;
use crate::core::policy::PolicySet;
use crate::models::event::AttendanceEvent;
use crate::models::report::{DayReport, WeekCell, WeekMatrix, WeekRow};
use chrono::{Datelike, Days, NaiveDate};

/// Monday on or before the reference date.
pub fn monday_of(reference: NaiveDate) -> NaiveDate {
    let offset = reference.weekday().num_days_from_monday() as u64;
    reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(reference)
}

/// The seven dates of the week containing the reference date.
pub fn week_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let monday = monday_of(reference);
    (0..7)
        .filter_map(|i| monday.checked_add_days(Days::new(i)))
        .collect()
}

/// Build the weekly matrix from one week's raw events.
/// A post/day without any scan becomes an explicit no-coverage cell, kept
/// apart from a recorded total of zero; the trailing weekly total sums only
/// numeric cells.
pub fn build_week_matrix(
    reference: NaiveDate,
    events: &[AttendanceEvent],
    policies: &PolicySet,
) -> WeekMatrix {
    let monday = monday_of(reference);
    let dates = week_dates(reference);

    let rows = policies
        .posts()
        .iter()
        .map(|post| {
            let cells: Vec<WeekCell> = dates
                .iter()
                .map(|d| cell_for(summarize_day(&post.code, *d, events, policies)))
                .collect();
            let weekly_total = cells.iter().filter_map(|c| c.numeric()).sum();
            WeekRow {
                post_id: post.code.clone(),
                cells,
                weekly_total,
            }
        })
        .collect();

    WeekMatrix {
        monday,
        dates,
        rows,
    }
}

fn cell_for(report: DayReport) -> WeekCell {
    if report.no_events {
        WeekCell::NoCoverage
    } else {
        WeekCell::Hours(report.total_hours)
    }
}

/// Day reports for every configured post on one date, in roster order.
/// Used by the day view and the export detail sheet.
pub fn day_reports(
    date: NaiveDate,
    events: &[AttendanceEvent],
    policies: &PolicySet,
) -> Vec<DayReport> {
    policies
        .posts()
        .iter()
        .map(|post| summarize_day(&post.code, date, events, policies))
        .collect()
}

// src/export/model.rs

use crate::models::event::AttendanceEvent;
use crate::models::report::{DayReport, WeekCell, WeekMatrix};
use crate::utils::time::format_hours;
use serde::Serialize;

/// Marker used for week cells without any recorded scan. Distinct from a
/// zero so the export never conflates "nobody badged" with "0 hours".
pub(crate) const NO_COVERAGE: &str = "--";

/// Flat raw-event row for the CSV/JSON dumps and the raw-events sheet.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i32,
    pub date: String,
    pub time: String,
    pub employee: String,
    pub post: String,
    pub action: String,
    pub valid: bool,
    pub source: String,
}

impl From<&AttendanceEvent> for EventExport {
    fn from(ev: &AttendanceEvent) -> Self {
        Self {
            id: ev.id,
            date: ev.date_str(),
            time: ev.time_str(),
            employee: ev.employee_id.clone(),
            post: ev.post_id.clone(),
            action: ev.action.to_db_str().to_string(),
            valid: ev.valid,
            source: ev.source.clone(),
        }
    }
}

/// One row of the per-day detail sheet.
#[derive(Serialize, Clone, Debug)]
pub struct DayDetailRow {
    pub date: String,
    pub post: String,
    pub slot: String,
    pub status: String,
    pub hours: String,
    pub detail: String,
}

pub(crate) fn raw_headers() -> Vec<&'static str> {
    vec![
        "id", "date", "time", "employee", "post", "action", "valid", "source",
    ]
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.clone(),
        e.time.clone(),
        e.employee.clone(),
        e.post.clone(),
        e.action.clone(),
        e.valid.to_string(),
        e.source.clone(),
    ]
}

pub(crate) fn detail_headers() -> Vec<&'static str> {
    vec!["date", "post", "slot", "status", "hours", "detail"]
}

/// Flatten one day report into detail rows: one per slot, one per
/// diagnostic. Diagnostics are rows of their own so nothing is hidden
/// behind a slot winner.
pub(crate) fn day_detail_rows(report: &DayReport) -> Vec<DayDetailRow> {
    let date = report.date.format("%Y-%m-%d").to_string();
    let mut rows = vec![
        DayDetailRow {
            date: date.clone(),
            post: report.post_id.clone(),
            slot: "morning".to_string(),
            status: report.morning.status.as_str().to_string(),
            hours: format_hours(report.morning.hours),
            detail: report.morning.detail.clone(),
        },
        DayDetailRow {
            date: date.clone(),
            post: report.post_id.clone(),
            slot: "afternoon".to_string(),
            status: report.afternoon.status.as_str().to_string(),
            hours: format_hours(report.afternoon.hours),
            detail: report.afternoon.detail.clone(),
        },
    ];
    for diag in &report.diagnostics {
        rows.push(DayDetailRow {
            date: date.clone(),
            post: report.post_id.clone(),
            slot: "diagnostic".to_string(),
            status: String::new(),
            hours: String::new(),
            detail: diag.clone(),
        });
    }
    rows
}

pub(crate) fn detail_to_row(r: &DayDetailRow) -> Vec<String> {
    vec![
        r.date.clone(),
        r.post.clone(),
        r.slot.clone(),
        r.status.clone(),
        r.hours.clone(),
        r.detail.clone(),
    ]
}

pub(crate) fn week_headers(matrix: &WeekMatrix) -> Vec<String> {
    let mut headers = vec!["post".to_string()];
    for d in &matrix.dates {
        headers.push(d.format("%a %d.%m").to_string());
    }
    headers.push("total".to_string());
    headers
}

pub(crate) fn week_to_rows(matrix: &WeekMatrix) -> Vec<Vec<String>> {
    matrix
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.post_id.clone()];
            for c in &row.cells {
                cells.push(match c {
                    WeekCell::Hours(h) => format_hours(*h),
                    WeekCell::NoCoverage => NO_COVERAGE.to_string(),
                });
            }
            cells.push(format_hours(row.weekly_total));
            cells
        })
        .collect()
}

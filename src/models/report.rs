use super::shift::ShiftResult;
use chrono::NaiveDate;
use serde::Serialize;

/// One post's classified day: who covered the morning and afternoon slots,
/// what went wrong, and the hour total. Recomputed on every view request.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub post_id: String,
    pub date: NaiveDate,
    pub morning: ShiftResult,
    pub afternoon: ShiftResult,
    pub diagnostics: Vec<String>,
    pub total_hours: f64,
    /// True when the event store returned no scans for this post/day.
    /// Keeps "no coverage" distinct from a recorded zero in the week view.
    pub no_events: bool,
}

/// One cell of the weekly matrix.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum WeekCell {
    Hours(f64),
    NoCoverage,
}

impl WeekCell {
    pub fn numeric(&self) -> Option<f64> {
        match self {
            WeekCell::Hours(h) => Some(*h),
            WeekCell::NoCoverage => None,
        }
    }
}

/// One post's row in the weekly matrix: seven day cells plus the total.
#[derive(Debug, Clone, Serialize)]
pub struct WeekRow {
    pub post_id: String,
    pub cells: Vec<WeekCell>,
    pub weekly_total: f64,
}

/// Weekly hour matrix: posts as rows, the 7 dates of a Monday-based week
/// as columns, with a trailing weekly-total column per row.
#[derive(Debug, Clone, Serialize)]
pub struct WeekMatrix {
    pub monday: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<WeekRow>,
}

impl WeekMatrix {
    pub fn row(&self, post_id: &str) -> Option<&WeekRow> {
        self.rows.iter().find(|r| r.post_id == post_id)
    }
}

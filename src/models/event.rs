use super::action::Action;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One raw badge scan as returned by the event store.
/// Immutable input of the engine; never mutated downstream.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i32,
    pub employee_id: String, // ⇔ attendance.employee (TEXT)
    pub post_id: String,     // ⇔ attendance.post (TEXT)
    pub action: Action,      // ⇔ attendance.action ('in' | 'out')
    pub date: NaiveDate,     // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,     // ⇔ attendance.time (TEXT "HH:MM")
    pub valid: bool,         // ⇔ attendance.valid (INT 0/1), surfaced as-is
    pub source: String,      // ⇔ attendance.source (TEXT, default 'cli')
    pub created_at: String,  // ⇔ attendance.created_at (TEXT, ISO8601)
}

impl AttendanceEvent {
    /// High-level constructor for events recorded from the CLI
    /// (supervisor corrections of missing scans).
    pub fn new(
        id: i32,
        employee_id: String,
        post_id: String,
        action: Action,
        date: NaiveDate,
        time: NaiveTime,
        valid: bool,
    ) -> Self {
        Self {
            id,
            employee_id,
            post_id,
            action,
            date,
            time,
            valid,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn naive_timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

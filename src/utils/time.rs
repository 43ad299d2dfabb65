//! Time utilities: parsing HH:MM, hour formatting for report cells.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_arg(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Render an hour value the way the reports print it: no trailing zeros
/// beyond the quarter-hour precision the policy table uses.
pub fn format_hours(h: f64) -> String {
    if (h - h.round()).abs() < f64::EPSILON {
        format!("{:.1}", h)
    } else {
        format!("{}", h)
    }
}

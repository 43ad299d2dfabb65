//! PairBuilder: collapse one post/day's raw scans into at most one
//! check-in/check-out pair per employee.

use crate::models::action::Action;
use crate::models::event::AttendanceEvent;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Candidate shift of one employee on one post and business day.
/// Either side may be absent (missing-scan condition).
#[derive(Debug, Clone)]
pub struct Pair {
    pub employee_id: String,
    pub post_id: String,
    pub date: NaiveDate,
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
}

impl Pair {
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Free-text reference to the underlying scans, used in report details
    /// and diagnostics.
    pub fn detail(&self) -> String {
        let fmt = |t: &Option<NaiveDateTime>| match t {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        };
        format!(
            "{}: in {}, out {}",
            self.employee_id,
            fmt(&self.check_in),
            fmt(&self.check_out)
        )
    }
}

/// Business day an event belongs to. A check-out scanned after midnight but
/// before the early-morning cutoff closes the previous day's shift, so it is
/// attributed to that day instead of its own calendar date.
pub fn business_date(event: &AttendanceEvent) -> NaiveDate {
    if event.action.is_check_out() && event.time < crate::core::policy::early_morning_cutoff() {
        event.date.checked_sub_days(Days::new(1)).unwrap_or(event.date)
    } else {
        event.date
    }
}

/// Build one pair per employee from the scans of one post and business day.
/// Check-in is the earliest check-in of the day, check-out the latest
/// check-out. Employees without any scan are not represented. Output order
/// is discovery order in the event stream, which keeps downstream slot
/// resolution deterministic.
pub fn build_pairs(post_id: &str, date: NaiveDate, events: &[AttendanceEvent]) -> Vec<Pair> {
    let mut pairs: Vec<Pair> = Vec::new();

    for ev in events {
        if ev.post_id != post_id || business_date(ev) != date {
            continue;
        }

        let ts = ev.naive_timestamp();

        let idx = match pairs.iter().position(|p| p.employee_id == ev.employee_id) {
            Some(i) => i,
            None => {
                pairs.push(Pair {
                    employee_id: ev.employee_id.clone(),
                    post_id: post_id.to_string(),
                    date,
                    check_in: None,
                    check_out: None,
                });
                pairs.len() - 1
            }
        };
        let pair = &mut pairs[idx];

        match ev.action {
            Action::CheckIn => {
                if pair.check_in.is_none_or(|cur| ts < cur) {
                    pair.check_in = Some(ts);
                }
            }
            Action::CheckOut => {
                if pair.check_out.is_none_or(|cur| ts > cur) {
                    pair.check_out = Some(ts);
                }
            }
        }
    }

    pairs
}

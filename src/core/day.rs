//! DayAggregator: combine every employee's classified pair for one post/day
//! into a single day report with slot winners, diagnostics and an hour total.

use crate::core::classify::{classify_interval, classify_pair};
use crate::core::merge::merge_pairs;
use crate::core::pairs::{build_pairs, business_date};
use crate::core::policy::PolicySet;
use crate::models::event::AttendanceEvent;
use crate::models::report::DayReport;
use crate::models::shift::{ShiftResult, ShiftStatus, Slot};
use chrono::NaiveDate;

/// Produce the day report for one post.
///
/// Resolution order:
/// 1. a single pair classified as double is authoritative for both slots;
/// 2. otherwise morning and afternoon are filled first-match in pair
///    discovery order, later qualifiers become `conflict` diagnostics;
/// 3. a merged relay interval that classifies as double fills the slots
///    when both are still open.
///
/// Every anomalous classification is appended to the diagnostics, whether
/// or not it influenced a slot.
pub fn summarize_day(
    post_id: &str,
    date: NaiveDate,
    events: &[AttendanceEvent],
    policies: &PolicySet,
) -> DayReport {
    let policy = policies.for_post(post_id);
    let pairs = build_pairs(post_id, date, events);
    let classified: Vec<_> = pairs.iter().map(|p| classify_pair(p, policy)).collect();

    let mut morning = ShiftResult::absent();
    let mut afternoon = ShiftResult::absent();
    let mut diagnostics: Vec<String> = Vec::new();

    // Scans the supervisor flagged invalid are surfaced untouched.
    for ev in events {
        if ev.post_id == post_id && business_date(ev) == date && !ev.valid {
            diagnostics.push(format!(
                "invalid_flag: {} {} {} {}",
                ev.employee_id,
                ev.action.to_db_str(),
                ev.date_str(),
                ev.time_str()
            ));
        }
    }

    // 1. One guard covering the whole day wins both slots outright.
    //    Further qualifying doubles lose and are recorded like slot losers.
    let mut full_day: Option<&ShiftResult> = None;
    for result in &classified {
        if result.slot == Slot::Double && result.status.is_ok() {
            if full_day.is_none() {
                full_day = Some(result);
            } else {
                diagnostics.push(format!("conflict: double also {}", result.detail));
            }
        }
    }
    if let Some(double) = full_day {
        morning = double.clone();
        afternoon = double.clone();
    } else {
        // 2. First qualifying pair per slot; losers are recorded, not hidden.
        for result in &classified {
            match result.slot {
                Slot::Morning if result.status.is_ok() => {
                    if morning.status == ShiftStatus::Absent {
                        morning = result.clone();
                    } else {
                        diagnostics.push(format!("conflict: morning also {}", result.detail));
                    }
                }
                Slot::Afternoon if result.status.is_ok() => {
                    if afternoon.status == ShiftStatus::Absent {
                        afternoon = result.clone();
                    } else {
                        diagnostics.push(format!("conflict: afternoon also {}", result.detail));
                    }
                }
                _ => {}
            }
        }

        // 3. Relay coverage: a handover chain spanning the whole day counts
        //    as a double when nobody filled either slot on their own.
        if morning.status == ShiftStatus::Absent && afternoon.status == ShiftStatus::Absent {
            let intervals = merge_pairs(&pairs, policy);
            if let Some(double) = intervals
                .iter()
                .filter(|iv| iv.employees.len() > 1)
                .map(|iv| classify_interval(iv, policy))
                .find(|r| r.slot == Slot::Double && r.status.is_ok())
            {
                morning = double.clone();
                afternoon = double;
            }
        }
    }

    for result in &classified {
        if !result.status.is_ok() {
            diagnostics.push(format!("{}: {}", result.status.as_str(), result.detail));
        }
    }

    let total_hours = total_hours(&morning, &afternoon, policy.double_hours);

    DayReport {
        post_id: post_id.to_string(),
        date,
        morning,
        afternoon,
        diagnostics,
        total_hours,
        no_events: pairs.is_empty(),
    }
}

/// A day-spanning double is counted once; a clean morning+afternoon split
/// totals the post's double value; anything else is a plain sum.
fn total_hours(morning: &ShiftResult, afternoon: &ShiftResult, double_hours: f64) -> f64 {
    if morning.slot == Slot::Double {
        return morning.hours;
    }
    if morning.slot == Slot::Morning
        && morning.status.is_ok()
        && afternoon.slot == Slot::Afternoon
        && afternoon.status.is_ok()
    {
        return double_hours;
    }
    morning.hours + afternoon.hours
}

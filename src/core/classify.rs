//! ShiftClassifier: match a pair or coverage interval against the post's
//! time windows and assign a slot with its hour value.

use crate::core::merge::CoverageInterval;
use crate::core::pairs::Pair;
use crate::core::policy::{self, ShiftPolicy};
use crate::models::shift::{ShiftResult, ShiftStatus, Slot};
use chrono::NaiveDateTime;

/// Classify one employee's pair. First match wins; anomalies come back as
/// statuses, never as errors.
pub fn classify_pair(pair: &Pair, policy: &ShiftPolicy) -> ShiftResult {
    match (pair.check_in, pair.check_out) {
        (None, None) => ShiftResult {
            slot: Slot::None,
            status: ShiftStatus::MissingBoth,
            hours: 0.0,
            detail: pair.detail(),
        },
        (Some(_), None) => ShiftResult {
            slot: Slot::None,
            status: ShiftStatus::MissingCheckout,
            hours: 0.0,
            detail: pair.detail(),
        },
        (None, Some(_)) => ShiftResult {
            slot: Slot::None,
            status: ShiftStatus::MissingCheckin,
            hours: 0.0,
            detail: pair.detail(),
        },
        (Some(check_in), Some(check_out)) => {
            classify_times(check_in, check_out, policy, pair.detail())
        }
    }
}

/// Classify a merged coverage interval (always complete by construction).
pub fn classify_interval(interval: &CoverageInterval, policy: &ShiftPolicy) -> ShiftResult {
    classify_times(interval.start, interval.end, policy, interval.detail())
}

fn classify_times(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    policy: &ShiftPolicy,
    detail: String,
) -> ShiftResult {
    let in_t = check_in.time();
    let out_t = check_out.time();

    // A check-out time of day below the check-in time of day is the next
    // calendar day, whether or not the store recorded it with its own date.
    let crosses_midnight = check_out.date() > check_in.date() || out_t < in_t;

    let (slot, status, hours) = if crosses_midnight {
        // Only a double shift may run past midnight, only on posts whose
        // policy allows it, and only up to the early-morning cutoff.
        if policy.allow_overnight_double
            && in_t <= policy::morning_in_end()
            && out_t < policy::early_morning_cutoff()
        {
            (Slot::Double, ShiftStatus::Ok, policy.double_hours)
        } else {
            (Slot::None, ShiftStatus::InvalidTimes, 0.0)
        }
    } else if in_t <= policy::morning_in_end() && out_t >= policy::evening_start() {
        (Slot::Double, ShiftStatus::Ok, policy.double_hours)
    } else if in_t <= policy::morning_in_end() && out_t <= policy::morning_out_end() {
        (Slot::Morning, ShiftStatus::Ok, policy.shift_hours)
    } else if in_t >= policy::afternoon_in_start() && out_t >= policy::evening_start() {
        (Slot::Afternoon, ShiftStatus::Ok, policy.shift_hours)
    } else {
        (Slot::None, ShiftStatus::InvalidTimes, 0.0)
    };

    ShiftResult {
        slot,
        status,
        hours,
        detail,
    }
}

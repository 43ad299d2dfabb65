//! Classification result types.
//! These replace the loose status strings of the legacy dashboard with
//! exhaustive enums so every outcome is matched at the call sites.

use serde::Serialize;

/// Which report slot an interval covers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Slot {
    Morning,
    Afternoon,
    Double,
    None,
}

/// Outcome of classifying one pair or coverage interval.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ShiftStatus {
    Ok,
    /// Slot placeholder: nobody covered it and nothing anomalous was scanned.
    Absent,
    MissingBoth,
    MissingCheckin,
    MissingCheckout,
    InvalidTimes,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Ok => "ok",
            ShiftStatus::Absent => "absent",
            ShiftStatus::MissingBoth => "missing_both",
            ShiftStatus::MissingCheckin => "missing_checkin",
            ShiftStatus::MissingCheckout => "missing_checkout",
            ShiftStatus::InvalidTimes => "invalid_times",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ShiftStatus::Ok)
    }
}

/// A classified pair/interval with the hours it is worth and a free-text
/// reference to the underlying scans for the detail sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftResult {
    pub slot: Slot,
    pub status: ShiftStatus,
    pub hours: f64,
    pub detail: String,
}

impl ShiftResult {
    /// Placeholder for a slot no pair qualified for.
    pub fn absent() -> Self {
        Self {
            slot: Slot::None,
            status: ShiftStatus::Absent,
            hours: 0.0,
            detail: String::new(),
        }
    }

}

//! IntervalMerger: join adjacent complete pairs into continuous coverage
//! intervals, tolerating small handover gaps between relieving guards.

use crate::core::pairs::Pair;
use crate::core::policy::ShiftPolicy;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Continuous coverage of one post, possibly by a relay of employees.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageInterval {
    pub post_id: String,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Employees that contributed, in handover order.
    pub employees: Vec<String>,
}

impl CoverageInterval {
    pub fn detail(&self) -> String {
        format!(
            "{}: in {}, out {}",
            self.employees.join("+"),
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Merge complete pairs into the minimal set of non-overlapping intervals.
/// Two intervals are joined when the gap between one end and the next start
/// is at most the policy swap window; the joined end is the max of both.
/// Incomplete pairs do not contribute. The operation is idempotent.
pub fn merge_pairs(pairs: &[Pair], policy: &ShiftPolicy) -> Vec<CoverageInterval> {
    let swap = Duration::minutes(policy.swap_window_min);

    let mut intervals: Vec<CoverageInterval> = pairs
        .iter()
        .filter_map(|p| match (p.check_in, p.check_out) {
            (Some(start), Some(end)) => Some(CoverageInterval {
                post_id: p.post_id.clone(),
                date: p.date,
                start,
                end,
                employees: vec![p.employee_id.clone()],
            }),
            _ => None,
        })
        .collect();

    intervals.sort_by_key(|iv| iv.start);

    let mut merged: Vec<CoverageInterval> = Vec::new();
    for iv in intervals {
        let joins = matches!(merged.last(), Some(cur) if iv.start - cur.end <= swap);
        if joins {
            let cur = merged.last_mut().unwrap();
            if iv.end > cur.end {
                cur.end = iv.end;
            }
            for emp in iv.employees {
                if !cur.employees.contains(&emp) {
                    cur.employees.push(emp);
                }
            }
        } else {
            merged.push(iv);
        }
    }

    merged
}

//! IntervalMerger tests: handover tolerance, ordering, idempotence.

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{d, test_config};
use postwatch::core::merge::{CoverageInterval, merge_pairs};
use postwatch::core::pairs::Pair;
use postwatch::core::policy::PolicySet;

fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap())
}

fn complete_pair(employee: &str, start: NaiveDateTime, end: NaiveDateTime) -> Pair {
    Pair {
        employee_id: employee.to_string(),
        post_id: "Gate".to_string(),
        date: d("2025-09-01"),
        check_in: Some(start),
        check_out: Some(end),
    }
}

#[test]
fn handover_within_swap_window_merges_into_one_interval() {
    let policies = PolicySet::from_config(&test_config());
    let pairs = vec![
        complete_pair("A123", ts("2025-09-01", "06:00"), ts("2025-09-01", "14:00")),
        complete_pair("B456", ts("2025-09-01", "14:20"), ts("2025-09-01", "21:30")),
    ];

    let merged = merge_pairs(&pairs, policies.for_post("Gate"));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, ts("2025-09-01", "06:00"));
    assert_eq!(merged[0].end, ts("2025-09-01", "21:30"));
    assert_eq!(merged[0].employees, vec!["A123", "B456"]);
}

#[test]
fn overlapping_pairs_merge_and_keep_the_later_end() {
    let policies = PolicySet::from_config(&test_config());
    let pairs = vec![
        complete_pair("B456", ts("2025-09-01", "13:30"), ts("2025-09-01", "21:30")),
        complete_pair("A123", ts("2025-09-01", "06:00"), ts("2025-09-01", "14:00")),
    ];

    let merged = merge_pairs(&pairs, policies.for_post("Gate"));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].end, ts("2025-09-01", "21:30"));
    // sorted by start, so the morning guard comes first
    assert_eq!(merged[0].employees, vec!["A123", "B456"]);
}

#[test]
fn gap_beyond_swap_window_stays_split() {
    let policies = PolicySet::from_config(&test_config());
    let pairs = vec![
        complete_pair("A123", ts("2025-09-01", "06:00"), ts("2025-09-01", "12:00")),
        complete_pair("B456", ts("2025-09-01", "13:00"), ts("2025-09-01", "21:30")),
    ];

    let merged = merge_pairs(&pairs, policies.for_post("Gate"));
    assert_eq!(merged.len(), 2);
    assert!(merged[0].end <= merged[1].start);
}

#[test]
fn incomplete_pairs_do_not_contribute() {
    let policies = PolicySet::from_config(&test_config());
    let pairs = vec![
        Pair {
            employee_id: "A123".to_string(),
            post_id: "Gate".to_string(),
            date: d("2025-09-01"),
            check_in: Some(ts("2025-09-01", "06:10")),
            check_out: None,
        },
        complete_pair("B456", ts("2025-09-01", "13:30"), ts("2025-09-01", "21:30")),
    ];

    let merged = merge_pairs(&pairs, policies.for_post("Gate"));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].employees, vec!["B456"]);
}

#[test]
fn merging_an_already_merged_set_is_identity() {
    let policies = PolicySet::from_config(&test_config());
    let policy = policies.for_post("Gate");
    let pairs = vec![
        complete_pair("A123", ts("2025-09-01", "06:00"), ts("2025-09-01", "14:00")),
        complete_pair("B456", ts("2025-09-01", "14:20"), ts("2025-09-01", "21:30")),
        complete_pair("C789", ts("2025-09-01", "23:00"), ts("2025-09-01", "23:45")),
    ];

    let merged = merge_pairs(&pairs, policy);

    // feed the merged intervals back through as synthetic pairs
    let again: Vec<Pair> = merged
        .iter()
        .map(|iv| Pair {
            employee_id: iv.employees.join("+"),
            post_id: iv.post_id.clone(),
            date: iv.date,
            check_in: Some(iv.start),
            check_out: Some(iv.end),
        })
        .collect();
    let remerged = merge_pairs(&again, policy);

    let bounds = |ivs: &[CoverageInterval]| -> Vec<(NaiveDateTime, NaiveDateTime)> {
        ivs.iter().map(|iv| (iv.start, iv.end)).collect()
    };
    assert_eq!(bounds(&merged), bounds(&remerged));
}

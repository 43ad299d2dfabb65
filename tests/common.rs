#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use postwatch::config::Config;
use postwatch::models::action::Action;
use postwatch::models::event::AttendanceEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pw() -> Command {
    cargo_bin_cmd!("postwatch")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_postwatch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Default config with the standard roster and policy numbers, used by the
/// pure-engine tests. No file is read.
pub fn test_config() -> Config {
    Config::default()
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Shorthand badge-scan constructor for engine tests.
pub fn scan(employee: &str, post: &str, action: Action, date: &str, time: &str) -> AttendanceEvent {
    AttendanceEvent::new(
        0,
        employee.to_string(),
        post.to_string(),
        action,
        d(date),
        chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        true,
    )
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    pw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // Monday 2025-09-01: full morning+afternoon on the Gate
    pw().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "Gate",
        "A123",
        "in",
        "06:00",
    ])
    .assert()
    .success();

    pw().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "Gate",
        "A123",
        "out",
        "14:00",
    ])
    .assert()
    .success();

    pw().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "Gate",
        "B456",
        "in",
        "13:30",
    ])
    .assert()
    .success();

    pw().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "Gate",
        "B456",
        "out",
        "21:30",
    ])
    .assert()
    .success();
}

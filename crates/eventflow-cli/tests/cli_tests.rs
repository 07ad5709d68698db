//! Integration tests for the `eventflow` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check,
//! suggest, list and stats subcommands through the actual binary, against both
//! the built-in sample data and JSON/TOML fixtures.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

/// Helper: path to the scheduler.toml fixture.
fn config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/scheduler.toml")
}

fn eventflow() -> Command {
    Command::cargo_bin("eventflow").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_conflict_with_suggestions() {
    // Sample data: Career Guidance Seminar holds Lecture Hall B 11:00-13:00.
    eventflow()
        .args([
            "check",
            "--date",
            "2025-01-28",
            "--start",
            "12:00",
            "--end",
            "14:00",
            "--venue",
            "Lecture Hall B",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflict: Lecture Hall B"))
        .stdout(predicate::str::contains("[3] Career Guidance Seminar"))
        .stdout(predicate::str::contains("9:00 AM - 11:00 AM"))
        .stdout(predicate::str::contains("1:00 PM - 3:00 PM"))
        .stdout(predicate::str::contains("10:00 AM").not());
}

#[test]
fn check_touching_booking_is_clear() {
    eventflow()
        .args([
            "check",
            "--date",
            "2025-01-28",
            "--start",
            "13:00",
            "--end",
            "14:00",
            "--venue",
            "Lecture Hall B",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflict"));
}

#[test]
fn check_exclude_skips_the_edited_event() {
    eventflow()
        .args([
            "check",
            "--date",
            "2025-01-28",
            "--start",
            "11:00",
            "--end",
            "13:00",
            "--venue",
            "Lecture Hall B",
            "--exclude",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflict"));
}

#[test]
fn check_json_output() {
    let output = eventflow()
        .args([
            "--json",
            "-i",
            events_path(),
            "check",
            "--date",
            "2026-03-02",
            "--start",
            "10:00",
            "--end",
            "12:00",
            "--venue",
            "EE Lab 2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["conflict"], true);
    assert_eq!(value["conflictingIds"][0], "lab-1");
    // Busy 09-11 and 13-14 campus-wide; 2h windows at 11:00, 14:00, 15:00.
    assert_eq!(
        value["suggestions"],
        serde_json::json!(["11:00 AM - 1:00 PM", "2:00 PM - 4:00 PM", "3:00 PM - 5:00 PM"])
    );
}

#[test]
fn check_malformed_time_fails() {
    eventflow()
        .args([
            "check",
            "--date",
            "2025-01-28",
            "--start",
            "noon",
            "--end",
            "14:00",
            "--venue",
            "Lecture Hall B",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed time input"));
}

// ─────────────────────────────────────────────────────────────────────────────
// suggest
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn suggest_on_empty_day() {
    eventflow()
        .args(["suggest", "--date", "2030-06-01", "--duration", "2"])
        .assert()
        .success()
        .stdout("9:00 AM - 11:00 AM\n10:00 AM - 12:00 PM\n11:00 AM - 1:00 PM\n");
}

#[test]
fn suggest_from_fixture() {
    eventflow()
        .args(["-i", events_path(), "suggest", "--date", "2026-03-02", "--duration", "1"])
        .assert()
        .success()
        .stdout("11:00 AM - 12:00 PM\n12:00 PM - 1:00 PM\n2:00 PM - 3:00 PM\n");
}

#[test]
fn suggest_with_config_grid() {
    eventflow()
        .args([
            "-i",
            events_path(),
            "--config",
            config_path(),
            "suggest",
            "--date",
            "2026-03-02",
            "--duration",
            "1",
        ])
        .assert()
        .success()
        .stdout("8:00 AM - 9:00 AM\n12:00 PM - 1:00 PM\n");
}

#[test]
fn suggest_fully_booked_day() {
    // Basketball tournament holds 08:00-18:00; every 9h window overlaps it.
    eventflow()
        .args(["suggest", "--date", "2025-02-10", "--duration", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No free slots on 2025-02-10"));
}

#[test]
fn suggest_zero_duration_fails() {
    eventflow()
        .args(["suggest", "--date", "2025-02-10", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

// ─────────────────────────────────────────────────────────────────────────────
// list / stats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_sample_events_by_date() {
    eventflow()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI & Machine Learning Workshop"))
        .stdout(predicate::str::contains("4 events found"));
}

#[test]
fn list_filters_by_type() {
    eventflow()
        .args(["-i", events_path(), "list", "--type", "academic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History of Mathematics"))
        .stdout(predicate::str::contains("55/Unlimited"))
        .stdout(predicate::str::contains("1 event found"));
}

#[test]
fn list_rejects_unknown_type() {
    eventflow()
        .args(["list", "--type", "party"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown event type"));
}

#[test]
fn stats_json_from_fixture() {
    let output = eventflow()
        .args(["--json", "-i", events_path(), "stats"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["total_events"], 2);
    assert_eq!(value["stats"]["completed_events"], 1);
    assert_eq!(value["stats"]["completion_rate"], 50);
    assert_eq!(value["byType"]["academic"], 1);
    assert_eq!(value["byDepartment"]["Mathematics"], 1);
}

#[test]
fn stats_text() {
    eventflow()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total events:      4"))
        .stdout(predicate::str::contains("Total attendees:   1520"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails() {
    eventflow()
        .args(["-i", "/nonexistent/events.json", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn broken_input_file_fails() {
    let broken = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/broken.json");
    eventflow()
        .args(["-i", broken, "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events"));
}

#[test]
fn no_subcommand_shows_usage() {
    eventflow()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

//! Integration tests for the `availability` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the month and day
//! subcommands through the actual binary, including config loading, category
//! scoping, output files, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: path to the entries.json fixture.
fn entries_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/entries.json")
}

/// Helper: path to the bookings.json fixture.
fn bookings_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bookings.json")
}

/// Helper: path to an entries fixture with an unparseable start time.
fn bad_entries_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_entries.json")
}

/// Helper: the binary with the given data files and "now".
fn availability_with(entries: &str, bookings: &str, as_of: &str) -> Command {
    let mut cmd = Command::cargo_bin("availability").unwrap();
    cmd.env_remove("AVAILABILITY_CONFIG")
        .env_remove("RUST_LOG")
        .args(["--entries", entries])
        .args(["--bookings", bookings])
        .args(["--as-of", as_of]);
    cmd
}

/// Helper: the binary with fixture data and a fixed "now".
fn availability() -> Command {
    availability_with(entries_path(), bookings_path(), "2024-01-01T00:00:00")
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command should run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn dates(days: &Value) -> Vec<String> {
    days.as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap().to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Month subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn month_lists_open_dates_in_order() {
    let days = stdout_json(availability().args([
        "month",
        "--freelancer",
        "f1",
        "--start",
        "2024-01-05",
        "--end",
        "2024-01-20",
    ]));

    // 2024-01-15 is fully booked; the cancelled booking on 01-22 blocks nothing.
    assert_eq!(
        dates(&days),
        vec!["2024-01-01", "2024-01-08", "2024-01-10", "2024-01-22", "2024-01-29"]
    );
    assert_eq!(days[0]["status"], "guaranteed");
    assert_eq!(days[2]["status"], "tentative");
}

#[test]
fn month_category_scopes_bookings_only() {
    let days = stdout_json(availability().args([
        "month",
        "--freelancer",
        "f1",
        "--start",
        "2024-01-01",
        "--end",
        "2024-01-31",
        "--category",
        "design",
    ]));

    // The dev booking no longer counts, so 2024-01-15 comes back.
    assert!(dates(&days).contains(&"2024-01-15".to_string()));
    assert_eq!(days.as_array().unwrap().len(), 6);
}

#[test]
fn month_respects_as_of() {
    let mut cmd = availability_with(entries_path(), bookings_path(), "2024-01-23T12:00:00");
    let days = stdout_json(cmd.args([
        "month",
        "--freelancer",
        "f1",
        "--start",
        "2024-01-01",
        "--end",
        "2024-01-31",
    ]));

    assert_eq!(dates(&days), vec!["2024-01-29"]);
}

#[test]
fn month_for_unknown_freelancer_is_empty() {
    availability()
        .args([
            "month",
            "--freelancer",
            "nobody",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Day subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_lists_free_slots() {
    let listing = stdout_json(availability().args([
        "day",
        "--freelancer",
        "f1",
        "--date",
        "2024-01-08",
    ]));

    assert_eq!(listing["count"], 2);
    assert_eq!(listing["noAvailability"], false);
    assert_eq!(listing["slots"][0]["start"], "10:00");
    assert_eq!(listing["slots"][0]["startTime"], "2024-01-08T10:00:00");
    assert_eq!(listing["slots"][1]["end"], "12:00");
}

#[test]
fn day_drops_trailing_partial_hour() {
    let listing = stdout_json(availability().args([
        "day",
        "--freelancer",
        "f1",
        "--date",
        "2024-01-10",
    ]));

    assert_eq!(listing["count"], 2);
    assert_eq!(listing["slots"][1]["end"], "16:00");
}

#[test]
fn day_without_entries_reports_no_availability() {
    let listing = stdout_json(availability().args([
        "day",
        "--freelancer",
        "f1",
        "--date",
        "2024-01-09",
    ]));

    assert_eq!(listing["noAvailability"], true);
    assert_eq!(listing["count"], 0);
    assert_eq!(listing["message"], "No availability for this date");
}

#[test]
fn day_pretty_output_to_file() {
    let output_path = std::env::temp_dir().join("availability-test-day-output.json");
    let _ = std::fs::remove_file(&output_path);

    availability()
        .args(["--pretty", "-o"])
        .arg(&output_path)
        .args(["day", "--freelancer", "f1", "--date", "2024-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("\n  \"slots\""), "output should be pretty-printed");

    let _ = std::fs::remove_file(&output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn paths_can_come_from_config_file() {
    let config_path = std::env::temp_dir().join("availability-test-config.toml");
    std::fs::write(
        &config_path,
        format!(
            "entries_path = {:?}\nbookings_path = {:?}\n",
            entries_path(),
            bookings_path()
        ),
    )
    .unwrap();

    Command::cargo_bin("availability")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("AVAILABILITY_CONFIG", &config_path)
        .args(["--as-of", "2024-01-01T00:00:00"])
        .args(["day", "--freelancer", "f1", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"));

    let _ = std::fs::remove_file(&config_path);
}

#[test]
fn missing_data_paths_fail() {
    Command::cargo_bin("availability")
        .unwrap()
        .env_remove("AVAILABILITY_CONFIG")
        .args(["day", "--freelancer", "f1", "--date", "2024-01-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entries file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_date_is_rejected() {
    availability()
        .args(["day", "--freelancer", "f1", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn reversed_range_is_rejected() {
    availability()
        .args([
            "month",
            "--freelancer",
            "f1",
            "--start",
            "2024-02-01",
            "--end",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("after"));
}

#[test]
fn invalid_as_of_is_rejected() {
    availability_with(entries_path(), bookings_path(), "yesterday")
        .args(["day", "--freelancer", "f1", "--date", "2024-01-08"])
        .assert()
        .failure();
}

#[test]
fn unreadable_data_file_fails_the_request() {
    availability_with("/nonexistent/entries.json", bookings_path(), "2024-01-01T00:00:00")
        .args(["day", "--freelancer", "f1", "--date", "2024-01-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list available slots"));
}

#[test]
fn corrupt_entry_fails_the_request() {
    availability_with(bad_entries_path(), bookings_path(), "2024-01-01T00:00:00")
        .args(["month", "--freelancer", "f1", "--start", "2024-01-01", "--end", "2024-01-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute month availability"));
}

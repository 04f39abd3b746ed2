//! Integration tests for recording, showing, listing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{in_diary, init_diary};

fn stored_json(dir: &std::path::Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join(".sleepdiary/sleep_diary_entries.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_morning_saves_entry() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args([
            "morning",
            "2024-01-01",
            "--bed-time",
            "23:00",
            "--quality",
            "4",
            "--alarm",
            "--notes",
            "woke at 3am",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("資料已儲存！"));

    let json = stored_json(temp.path());
    let entry = &json["2024-01-01"];
    assert_eq!(entry["date"], "2024-01-01");
    assert_eq!(entry["dayType"], "work");
    assert_eq!(entry["bedTime"], "23:00");
    assert_eq!(entry["trySleepTime"], "22:30");
    assert_eq!(entry["sleepQuality"], 4);
    assert_eq!(entry["useAlarm"], true);
    assert_eq!(entry["notes"], "woke at 3am");
}

#[test]
fn test_evening_keeps_morning_fields() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["morning", "2024-01-01", "--day-type", "rest"])
        .assert()
        .success();
    in_diary(temp.path())
        .args([
            "evening",
            "2024-01-01",
            "--caffeine",
            "2 cups",
            "--caffeine-time",
            "15:00",
            "--nap-count",
            "1",
        ])
        .assert()
        .success();

    let json = stored_json(temp.path());
    let entry = &json["2024-01-01"];
    assert_eq!(entry["dayType"], "rest");
    assert_eq!(entry["caffeineAmount"], "2 cups");
    assert_eq!(entry["caffeineTime"], "15:00");
    assert_eq!(entry["napCount"], 1);
    assert_eq!(entry["alcoholTime"], "");
}

#[test]
fn test_invalid_date_exit_code() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["morning", "01/02/2024"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_show_unsaved_day_shows_defaults() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["show", "2024-05-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-05 (工作日)  [未儲存]"))
        .stdout(predicate::str::contains("就寢時間: 22:00"))
        .stdout(predicate::str::contains("睡眠品質(1-5): 3"));

    // Showing a day never creates it
    assert!(!temp
        .path()
        .join(".sleepdiary/sleep_diary_entries.json")
        .exists());
}

#[test]
fn test_history_empty() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("目前還沒有紀錄"));
}

#[test]
fn test_history_newest_first() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    for date in ["2024-01-15", "2024-01-20", "2024-01-10"] {
        in_diary(temp.path())
            .args(["morning", date])
            .assert()
            .success();
    }

    let output = in_diary(temp.path()).arg("history").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2024-01-20"));
    assert!(lines[1].starts_with("2024-01-15"));
    assert!(lines[2].starts_with("2024-01-10"));
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["morning", "2024-01-01"])
        .assert()
        .success();
    in_diary(temp.path())
        .args(["morning", "2024-01-02"])
        .assert()
        .success();

    in_diary(temp.path())
        .args(["delete", "2024-01-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2024-01-01"));

    let json = stored_json(temp.path());
    assert!(json.get("2024-01-01").is_none());
    assert!(json.get("2024-01-02").is_some());
}

#[test]
fn test_delete_declined_keeps_entry() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["morning", "2024-01-01"])
        .assert()
        .success();

    in_diary(temp.path())
        .args(["delete", "2024-01-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("確定要刪除這天的紀錄嗎？"))
        .stdout(predicate::str::contains("Cancelled"));

    assert!(stored_json(temp.path()).get("2024-01-01").is_some());
}

#[test]
fn test_delete_confirmed_on_stdin() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["morning", "2024-01-01"])
        .assert()
        .success();

    in_diary(temp.path())
        .args(["delete", "2024-01-01"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(stored_json(temp.path()).get("2024-01-01").is_none());
}

#[test]
fn test_delete_missing_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    in_diary(temp.path())
        .args(["delete", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for 2024-01-01"));
}

#[test]
fn test_corrupt_store_starts_empty() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    fs::write(
        temp.path().join(".sleepdiary/sleep_diary_entries.json"),
        "{ this is not json",
    )
    .unwrap();

    in_diary(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("目前還沒有紀錄"));
}

#[test]
fn test_blank_browser_fields_survive_later_saves() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    fs::write(
        temp.path().join(".sleepdiary/sleep_diary_entries.json"),
        r#"{"2024-01-01":{"date":"2024-01-01","dayType":"work","bedTime":"22:00","trySleepTime":"22:30","sleepLatency":"20","wakeCount":"0","totalWakeTime":"0","lastWakeTime":"06:30","getUpTime":"07:00","sleepQuality":3,"useAlarm":false,"notes":"keep me","napCount":0,"napDuration":0,"alcoholAmount":"","alcoholTime":"","caffeineAmount":"","caffeineTime":"","medsName":"","medsTime":"","lightTime":"","exerciseTime":""},"2024-01-02":{"date":"2024-01-02","dayType":"rest","bedTime":"","trySleepTime":"23:00","sleepLatency":"1.5","wakeCount":"","totalWakeTime":"0","lastWakeTime":"07:00","getUpTime":"07:30","sleepQuality":4,"useAlarm":false,"notes":"","napCount":0,"napDuration":0,"alcoholAmount":"","alcoholTime":"","caffeineAmount":"","caffeineTime":"","medsName":"","medsTime":"","lightTime":"","exerciseTime":""}}"#,
    )
    .unwrap();

    in_diary(temp.path())
        .args(["morning", "2024-01-03", "--quality", "5"])
        .assert()
        .success();

    let stored = stored_json(temp.path());
    assert_eq!(stored.as_object().unwrap().len(), 3);
    assert_eq!(stored["2024-01-01"]["notes"], "keep me");
    assert_eq!(stored["2024-01-02"]["bedTime"], "");
    assert_eq!(stored["2024-01-02"]["sleepLatency"], 1.5);
}

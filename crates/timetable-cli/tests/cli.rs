//! End-to-end tests driving the `timetable` binary over stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

#[allow(deprecated)]
fn timetable(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("timetable").expect("timetable binary");
    cmd.current_dir(dir.path());
    cmd
}

const LECTURE_LAB_REPORT: &str = "1\n3\n\
Lecture\n0\n0\n09:00\n10:00\n\
Lab\n0\n0\n10 30\n12:00\n\
Report\n0\n1\n";

#[test]
fn test_full_session_reports_and_exports() {
    let dir = TempDir::new().unwrap();
    let assert = timetable(&dir)
        .write_stdin(LECTURE_LAB_REPORT)
        .assert()
        .success()
        .stdout(contains("WEEKLY TIMETABLE"))
        .stdout(contains("No clashes found."))
        .stdout(contains("Monday: 10:00 - 10:30"))
        .stdout(contains("Data exported successfully to 'schedule.json'"))
        .stdout(contains(
            "You can now view it visually on the webpage for confirmation.",
        ));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let report = stdout.find("Report  ").unwrap();
    let lecture = stdout.rfind("Lecture ").unwrap();
    let lab = stdout.rfind("Lab ").unwrap();
    assert!(report < lecture && lecture < lab, "unexpected order:\n{stdout}");

    let json = std::fs::read_to_string(dir.path().join("schedule.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["event"], "Report");
    assert_eq!(entries[0]["type"], "deadline");
    assert_eq!(entries[2]["start"], "10:30");
}

#[test]
fn test_overlap_reported() {
    let dir = TempDir::new().unwrap();
    timetable(&dir)
        .args(["--mode", "new", "--no-export"])
        .write_stdin("2\nA\n1\n0\n09:00\n10:00\nB\n1\n0\n09:30\n11:00\n")
        .assert()
        .success()
        .stdout(contains("Clash: 'A' overlaps with 'B' on Tuesday"))
        .stdout(contains("No free slots available."));
    assert!(!dir.path().join("schedule.json").exists());
}

#[test]
fn test_print_json_and_custom_output() {
    let dir = TempDir::new().unwrap();
    timetable(&dir)
        .args(["--mode", "new", "--print-json", "-o", "week.json"])
        .write_stdin("1\nGym\n0\n0\n7:00\n8:00\n")
        .assert()
        .success()
        .stdout(contains(
            r#"{"day":"Monday","event":"Gym","start":"07:00","end":"08:00","type":"fixed"}"#,
        ))
        .stdout(contains("Data exported successfully to 'week.json'"));
    assert!(dir.path().join("week.json").exists());
}

#[test]
fn test_append_mode_detects_existing_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("schedule.json"), "[\n]\n").unwrap();
    timetable(&dir)
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(contains(
            "Existing 'schedule.json' detected. New events will be added.",
        ));
}

#[test]
fn test_invalid_day_argument_rejected() {
    let dir = TempDir::new().unwrap();
    timetable(&dir)
        .args(["--day", "funday"])
        .assert()
        .failure()
        .stderr(contains("Invalid day name"));
}

#[test]
fn test_truncated_input_fails() {
    let dir = TempDir::new().unwrap();
    timetable(&dir)
        .args(["--mode", "new"])
        .write_stdin("1\nLecture\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error: unexpected end of input"))
        .stdout(contains("WEEKLY TIMETABLE").not());
}

#[test]
fn test_oversized_event_count_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    timetable(&dir)
        .args(["--mode", "new", "--no-export"])
        .write_stdin("99999999999999999\n")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("At most 100 events can be added at once."))
        .stderr(contains("error: unexpected end of input"));
}

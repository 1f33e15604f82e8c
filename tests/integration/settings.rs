// tests/integration/settings.rs
use std::fs;

use predicates::prelude::*;

use crate::common::{Workspace, blocks};

#[test]
fn defaults_scan_working_directory_into_report_txt() {
    let ws = Workspace::new();
    fs::write(ws.root().join("notes.txt"), "n").unwrap();

    ws.command().assert().success().stdout(predicate::str::contains("Report generated at: report.txt"));

    // The report itself is created before the scan, so it lists itself too.
    let report = fs::read_to_string(ws.root().join("report.txt")).unwrap();
    assert_eq!(blocks(&report).len(), 2);
    assert!(report.contains("File: ./notes.txt\n"));
    assert!(!report.contains("photos"));
}

#[test]
fn settings_file_in_working_directory_is_picked_up() {
    let ws = Workspace::new();
    ws.write_photo("a.txt", b"a");
    fs::write(
        ws.root().join("exif_report.json"),
        r#"{ "source_directory": "photos", "report_destination": "from-settings.txt" }"#,
    )
    .unwrap();

    ws.command().assert().success();

    let report = fs::read_to_string(ws.root().join("from-settings.txt")).unwrap();
    assert_eq!(blocks(&report).len(), 1);
    assert!(report.starts_with("File: photos/a.txt\n"));
}

#[test]
fn variables_win_over_settings_file() {
    let ws = Workspace::new();
    ws.write_photo("a.txt", b"a");
    let settings = ws.root().join("custom.json");
    fs::write(&settings, r#"{ "source_directory": "elsewhere", "report_destination": "ignored.txt" }"#).unwrap();

    ws.report_command().env("EXIF_REPORT_CONFIG", &settings).assert().success();

    assert_eq!(blocks(&ws.read_report()).len(), 1);
    assert!(!ws.root().join("ignored.txt").exists());
}

#[test]
fn invalid_fault_policy_is_rejected() {
    let ws = Workspace::new();

    ws.report_command()
        .env("EXIF_REPORT_ON_FILE_FAULT", "abort")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown file fault policy 'abort'"));

    assert!(!ws.report().exists());
}

#[test]
fn malformed_settings_file_is_rejected() {
    let ws = Workspace::new();
    fs::write(ws.root().join("exif_report.json"), "{ not json").unwrap();

    ws.command().assert().failure().stderr(predicate::str::contains("invalid settings file"));
}

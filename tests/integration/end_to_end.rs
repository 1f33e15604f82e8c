// tests/integration/end_to_end.rs
use std::fs;

use predicates::prelude::*;

use crate::common::{SEPARATOR, Workspace, block_for, blocks, gps_tiff, local_mtime};

#[test]
fn mixed_directory_gets_one_block_per_file() {
    let ws = Workspace::new();
    let photo = ws.write_photo("photo.tif", &gps_tiff((40, "N"), (73, "W")));
    let doc = ws.write_photo("doc.txt", b"hello");
    let corrupt = ws.write_photo("corrupt.jpg", &[0xff, 0xd8, 0x00, 0x01]);
    let bare = ws.write_photo("bare.jpg", &[0xff, 0xd8, 0xff, 0xd9]);

    ws.report_command()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Report generated at: {}", ws.report().display())));

    let report = ws.read_report();
    assert_eq!(blocks(&report).len(), 4);
    assert!(report.ends_with(&format!("{SEPARATOR}\n")));

    let photo_size = fs::metadata(&photo).unwrap().len();
    assert_eq!(
        block_for(&report, &photo),
        format!(
            "File: {}\nSize: {photo_size} bytes\nLast Modified: {}\nGPS Latitude: 40\nGPS Longitude: -73\n",
            photo.display(),
            local_mtime(&photo)
        )
    );
    assert_eq!(
        block_for(&report, &bare),
        format!(
            "File: {}\nSize: 4 bytes\nLast Modified: {}\nNo EXIF data found in the file.\n",
            bare.display(),
            local_mtime(&bare)
        )
    );
    assert!(block_for(&report, &doc).contains("Size: 5 bytes\n"));
    assert!(block_for(&report, &doc).contains("\nError reading EXIF data: "));
    assert!(block_for(&report, &corrupt).contains("\nError reading EXIF data: "));
}

#[test]
fn subdirectories_are_not_descended() {
    let ws = Workspace::new();
    let top = ws.write_photo("top.txt", b"top");
    fs::create_dir(ws.photos().join("nested")).unwrap();
    fs::write(ws.photos().join("nested").join("inner.txt"), "inner").unwrap();

    ws.report_command().assert().success();

    let report = ws.read_report();
    assert_eq!(blocks(&report).len(), 1);
    assert!(block_for(&report, &top).contains("Size: 3 bytes\n"));
    assert!(!report.contains("inner.txt"));
}

#[test]
fn empty_directory_gives_empty_report() {
    let ws = Workspace::new();

    ws.report_command().assert().success().stdout(predicate::str::contains("Report generated at:"));

    assert_eq!(ws.read_report(), "");
}

#[test]
fn existing_report_is_truncated_and_reruns_are_identical() {
    let ws = Workspace::new();
    ws.write_photo("a.txt", b"aaaa");
    ws.write_photo("b.jpg", &gps_tiff((10, "S"), (20, "E")));
    fs::write(ws.report(), "stale report contents that must disappear\n").unwrap();

    ws.report_command().assert().success();
    let first = ws.read_report();
    ws.report_command().assert().success();
    let second = ws.read_report();

    assert!(!first.contains("stale"));
    assert!(first.contains("GPS Latitude: -10\nGPS Longitude: 20\n"));
    assert_eq!(first, second);
}

#[test]
fn unwritable_report_fails_before_scanning() {
    let ws = Workspace::new();
    ws.write_photo("a.txt", b"a");
    let destination = ws.root().join("no-such-dir").join("report.txt");

    ws.report_command()
        .env("EXIF_REPORT_DESTINATION", &destination)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Report generated at:").not())
        .stderr(predicate::str::contains(format!(
            "Failed to open report file for writing: {}",
            destination.display()
        )));

    assert!(!destination.exists());
}

#[test]
fn missing_source_directory_leaves_empty_report() {
    let ws = Workspace::new();
    fs::remove_dir(ws.photos()).unwrap();

    ws.report_command()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Report generated at:").not())
        .stderr(predicate::str::is_empty().not());

    assert_eq!(ws.read_report(), "");
}

#[test]
fn source_that_is_a_file_is_rejected() {
    let ws = Workspace::new();
    let file = ws.root().join("plain.txt");
    fs::write(&file, "x").unwrap();

    ws.report_command()
        .env("EXIF_REPORT_SOURCE_DIR", &file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[cfg(unix)]
#[test]
fn symlinks_are_reported_only_when_followed() {
    use std::os::unix::fs::symlink;

    let ws = Workspace::new();
    let target = ws.root().join("outside.txt");
    fs::write(&target, "outside").unwrap();
    let link = ws.photos().join("link.txt");
    symlink(&target, &link).unwrap();
    symlink(ws.root().join("absent.txt"), ws.photos().join("dangling.txt")).unwrap();

    ws.report_command().assert().success();
    assert_eq!(ws.read_report(), "");

    ws.report_command().env("EXIF_REPORT_FOLLOW_LINKS", "true").assert().success();
    let report = ws.read_report();
    assert_eq!(blocks(&report).len(), 2);
    assert!(block_for(&report, &link).contains("Size: 7 bytes\n"));
    assert!(
        block_for(&report, &ws.photos().join("dangling.txt")).contains("\nError reading file metadata: ")
    );

    ws.report_command()
        .env("EXIF_REPORT_FOLLOW_LINKS", "true")
        .env("EXIF_REPORT_ON_FILE_FAULT", "skip")
        .assert()
        .success();
    assert_eq!(blocks(&ws.read_report()).len(), 1);
}

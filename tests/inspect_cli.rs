use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("vctriage").unwrap()
}

fn write_dataset(dir: &Path, rows: &[serde_json::Value]) -> PathBuf {
    let path = dir.join("dataset.jsonl");
    let mut contents = String::new();
    for row in rows {
        contents.push_str(&row.to_string());
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}

fn flawfinder_report(line: usize) -> String {
    format!(
        "FINAL RESULTS:\n\n/tmp/sample.c:{line}:  [2] (buffer) memcpy:\n  \
         Does not check for buffer overflows when copying to destination.\n\n\
         ANALYSIS SUMMARY:\n\nHits = 1\n"
    )
}

#[test]
fn missing_dataset_argument_exits_one_with_usage() {
    cmd()
        .arg("inspect")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Usage"));
}

#[test]
fn nonexistent_dataset_file_fails() {
    cmd()
        .args(["inspect", "/nonexistent/dataset.jsonl", "--batch"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"));
}

#[test]
fn malformed_dataset_line_is_a_dataset_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jsonl");
    fs::write(&path, "{not json\n").unwrap();

    cmd()
        .arg("inspect")
        .arg(&path)
        .arg("--batch")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Error:"));
}

#[test]
fn batch_inspection_prints_context_window() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "GitHub URL": "https://github.com/acme/widget",
            "Commit Hash": "deadbeef",
            "File": "sample.c",
            "Code": "a\nb\nc\nd\ne",
            "Flawfinder Vulnerabilities": flawfinder_report(3),
            "Flawfinder CWEs": "CWE-120"
        })],
    );

    cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .success()
        .stdout(contains("sample.c:3:"))
        .stdout(contains("b\nc\nd"))
        .stdout(contains("Reviewed 1 finding(s) across 1 record(s)"));
}

#[test]
fn first_line_finding_has_no_preceding_context() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "Code": "a\nb\nc",
            "Flawfinder Vulnerabilities": flawfinder_report(1)
        })],
    );

    let assert = cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // The target line directly follows the finding text
    assert!(stdout.contains("destination.\n\na\nb\n"));
}

#[test]
fn last_line_finding_has_no_following_context() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "Code": "a\nb\nc",
            "Flawfinder Vulnerabilities": flawfinder_report(3)
        })],
    );

    let assert = cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("b\nc\n"));
    assert!(stdout.ends_with("Reviewed 1 finding(s) across 1 record(s)\n"));
}

#[test]
fn every_finding_reuses_the_first_header_line() {
    let report = "FINAL RESULTS:\n\n\
        /tmp/sample.c:3:  [2] (buffer) memcpy:\n  first hit\n\n\
        /tmp/sample.c:5:  [1] (buffer) strlen:\n  second hit\n\n\
        ANALYSIS SUMMARY:\n\nHits = 2\n";
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "Code": "a\nb\nc\nd\ne",
            "Flawfinder Vulnerabilities": report
        })],
    );

    cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .success()
        .stdout(contains("b\nc\nd").count(2))
        .stdout(contains("Reviewed 2 finding(s) across 1 record(s)"));
}

#[test]
fn record_without_findings_is_skipped() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[
            json!({
                "Code": "a\nb",
                "Flawfinder Vulnerabilities": "FINAL RESULTS:\n\nANALYSIS SUMMARY:\n\nHits = 0\n"
            }),
            json!({ "Code": "a\nb", "Flawfinder Vulnerabilities": null }),
        ],
    );

    cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .success()
        .stdout(contains("Reviewed 0 finding(s) across 2 record(s)"));
}

#[test]
fn interactive_review_pauses_for_acknowledgment() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "Code": "a\nb\nc\nd\ne",
            "Flawfinder Vulnerabilities": flawfinder_report(3)
        })],
    );

    cmd()
        .arg("inspect")
        .arg(&dataset)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Press Enter to continue to the next vulnerability"));
}

#[test]
fn out_of_range_line_halts_the_batch() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(
        dir.path(),
        &[json!({
            "Code": "a\nb",
            "Flawfinder Vulnerabilities": flawfinder_report(40)
        })],
    );

    cmd()
        .arg("inspect")
        .arg(&dataset)
        .arg("--batch")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("outside"));
}

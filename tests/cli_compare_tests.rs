//! Integration tests for `render-regress compare`

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn perf_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn entry(name: &str, duration: f64, count: f64) -> String {
    format!(
        r#"{{"name":"{}","meanDuration":{},"stdevDuration":0.5,"meanCount":{},"stdevCount":0,"runs":10}}"#,
        name, duration, count
    )
}

fn fixtures() -> (NamedTempFile, NamedTempFile) {
    let baseline = perf_file(&[
        &entry("Btn", 30.0, 1.0),
        &entry("List", 10.0, 6.0),
        &entry("Text", 10.0, 2.0),
        &entry("OldWidget", 5.0, 1.0),
    ]);
    let current = perf_file(&[
        &entry("Btn", 42.0, 1.0),
        &entry("List", 10.25, 9.0),
        &entry("Text", 10.5, 2.0),
        &entry("NewWidget", 5.0, 1.0),
    ]);
    (baseline, current)
}

#[test]
fn test_text_report() {
    let (baseline, current) = fixtures();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("--baseline")
        .arg(baseline.path())
        .arg("--current")
        .arg(current.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SIGNIFICANT RENDER CHANGES (1 tests)"))
        .stdout(predicate::str::contains("Btn: 30.0 ms → 42.0 ms"))
        .stdout(predicate::str::contains("Render count changes (1)"))
        .stdout(predicate::str::contains("Added tests (1)"))
        .stdout(predicate::str::contains("Removed tests (1)"));
}

#[test]
fn test_json_report_buckets() {
    let (baseline, current) = fixtures();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path())
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(parsed["significant"][0]["name"], "Btn");
    assert_eq!(parsed["significant"][0]["durationDiffStatus"], "SIGNIFICANT");
    assert_eq!(parsed["countChanged"][0]["name"], "List");
    assert!(parsed["countChanged"][0].get("durationDiffStatus").is_none());
    assert_eq!(parsed["meaningless"][0]["name"], "Text");
    assert_eq!(parsed["added"][0]["name"], "NewWidget");
    assert_eq!(parsed["removed"][0]["name"], "OldWidget");
    assert_eq!(parsed["insignificant"].as_array().unwrap().len(), 0);
}

#[test]
fn test_fail_on_significant() {
    let (baseline, current) = fixtures();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path())
        .arg("--fail-on-significant");

    cmd.assert().failure().code(1);
}

#[test]
fn test_fail_on_significant_passes_without_regressions() {
    let baseline = perf_file(&[&entry("Btn", 30.0, 1.0)]);
    let current = perf_file(&[&entry("Btn", 30.5, 1.0)]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path())
        .arg("--fail-on-significant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NO SIGNIFICANT RENDER CHANGES"));
}

#[test]
fn test_threshold_override_changes_classification() {
    let baseline = perf_file(&[&entry("Card", 40.0, 1.0)]);
    let current = perf_file(&[&entry("Card", 43.0, 1.0)]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path())
        .arg("--significant-duration")
        .arg("2")
        .arg("--significant-percent")
        .arg("0.05");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SIGNIFICANT RENDER CHANGES (1 tests)"));
}

#[test]
fn test_missing_baseline_file() {
    let current = perf_file(&[&entry("Btn", 30.0, 1.0)]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg("/nonexistent/baseline.perf")
        .arg("-c")
        .arg(current.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("loading baseline"));
}

#[test]
fn test_malformed_line_reports_line_number() {
    let baseline = perf_file(&[&entry("Btn", 30.0, 1.0), "{ not json"]);
    let current = perf_file(&[&entry("Btn", 30.0, 1.0)]);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_invalid_threshold_rejected() {
    let (baseline, current) = fixtures();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-regress");
    cmd.arg("compare")
        .arg("-b")
        .arg(baseline.path())
        .arg("-c")
        .arg(current.path())
        .arg("--meaningless-duration")
        .arg("10");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid compare configuration"));
}

//! CLI integration tests.
//!
//! Runs the built binary and checks exit codes and output.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

use super::fixture_path;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("design-preflight").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("DESIGN_PREFLIGHT_CONFIG")
        .env_remove("DESIGN_PREFLIGHT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(args: &[&str], code: i32) -> Value {
    let out = cmd().args(args).assert().code(code).get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn test_compliant_config_exits_zero() {
    cmd()
        .args(["check", "--config", &fixture_path("compliant.json")])
        .assert()
        .success()
        .stdout(contains("[PASS] COLOR-001"))
        .stdout(contains("[SKIP] RESP-001"))
        .stdout(contains("Exit code: 0"));
}

#[test]
fn test_failing_config_exits_one() {
    cmd()
        .args(["check", "--config", &fixture_path("failing.json")])
        .assert()
        .code(1)
        .stdout(contains("[FAIL] COLOR-001"))
        .stdout(contains("[FAIL] HERO-001"));
}

#[test]
fn test_warnings_only_exit_two() {
    cmd()
        .args(["--config", &fixture_path("low_contrast.json")])
        .assert()
        .code(2)
        .stdout(contains("[WARN] A11Y-001"));
}

#[test]
fn test_no_config_uses_defaults() {
    cmd()
        .assert()
        .code(1)
        .stdout(contains("[PASS] COLOR-001"))
        .stdout(contains("[FAIL] NAV-001"));
}

#[test]
fn test_config_from_env() {
    cmd()
        .env("DESIGN_PREFLIGHT_CONFIG", fixture_path("compliant.json"))
        .assert()
        .success();
}

#[test]
fn test_missing_config_is_runtime_error() {
    cmd()
        .args(["check", "--config", "/nonexistent/design.json"])
        .assert()
        .code(3)
        .stderr(contains("/nonexistent/design.json"));
}

#[test]
fn test_malformed_config_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design.json");
    fs::write(&path, "{ \"heroHeight\": ").unwrap();

    cmd()
        .args(["check", "--config", path.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(contains("Parse error in"));
}

#[test]
fn test_unknown_flag_is_runtime_error() {
    cmd().arg("--bogus").assert().code(3);
}

#[test]
fn test_json_output() {
    let value = stdout_json(&["check", "--config", &fixture_path("failing.json"), "--format", "json"], 1);
    assert_eq!(value["theme"], "contest-dark");
    assert_eq!(value["summary"]["total"], 8);
    assert_eq!(value["checks"][0]["id"], "COLOR-001");
    assert_eq!(value["checks"][0]["result"]["status"], "fail");
}

#[test]
fn test_junit_output() {
    cmd()
        .args(["check", "--config", &fixture_path("compliant.json"), "--format", "junit"])
        .assert()
        .success()
        .stdout(contains("<testsuites tests=\"8\" failures=\"0\""))
        .stdout(contains("classname=\"design-preflight.accessibility\""));
}

#[test]
fn test_only_and_category_filters() {
    let value = stdout_json(
        &["check", "--config", &fixture_path("failing.json"), "--format", "json", "--only", "GRID-001"],
        1,
    );
    assert_eq!(value["checks"].as_array().unwrap().len(), 1);

    let value = stdout_json(&["check", "--format", "json", "--category", "cards"], 0);
    assert_eq!(value["checks"][0]["id"], "CARD-001");
    assert_eq!(value["summary"]["total"], 1);
}

#[test]
fn test_theme_override() {
    let value = stdout_json(
        &["check", "--config", &fixture_path("failing.json"), "--format", "json", "--theme", "light"],
        1,
    );
    assert_eq!(value["theme"], "contest-light");
}

#[test]
fn test_quiet_hides_passes() {
    cmd()
        .args(["check", "--config", &fixture_path("failing.json"), "--quiet"])
        .assert()
        .code(1)
        .stdout(contains("COLOR-001"))
        .stdout(contains("CARD-001"))
        .stdout(contains("RESP-001").not());
}

#[test]
fn test_baseline_round_trip() {
    let dir = TempDir::new().unwrap();
    let baseline = dir.path().join("baseline.json");
    let baseline = baseline.to_str().unwrap();

    cmd()
        .args(["check", "--config", &fixture_path("failing.json"), "--save-baseline", baseline])
        .assert()
        .code(1);
    assert!(fs::metadata(baseline).is_ok());

    cmd()
        .args(["check", "--config", &fixture_path("compliant.json"), "--baseline", baseline])
        .assert()
        .success()
        .stdout(contains("BASELINE COMPARISON"))
        .stdout(contains("Resolved: COLOR-001"));
}

#[test]
fn test_list_command() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("COLOR-001"))
        .stdout(contains("A11Y-001"))
        .stdout(contains("ACCESSIBILITY CHECKS:"));
}

#[test]
fn test_version_command() {
    cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("design-preflight"));
}

#[test]
fn test_status_command() {
    cmd()
        .args(["status", "--theme", "dark"])
        .assert()
        .success()
        .stdout(contains("Theme: contest-dark (dark)"))
        .stdout(contains("[PASS] Color palette: 3/3"));

    let value = stdout_json(&["status", "--json"], 0);
    assert_eq!(value["theme"], "contest-light");
    assert_eq!(value["navigationLoggedOut"]["count"], 3);
}

#[test]
fn test_status_follows_saved_theme() {
    let value = stdout_json(&["status", "--json", "--saved-theme", "contest-dark"], 0);
    assert_eq!(value["theme"], "contest-dark");
    assert_eq!(value["isDark"], true);

    let value = stdout_json(&["status", "--json", "--prefers-dark", "--toggle"], 0);
    assert_eq!(value["theme"], "contest-light");
}

#[test]
fn test_null_and_loose_config_values_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design.json");
    fs::write(
        &path,
        r#"{"heroHeight": null, "routes": null, "sections": [{"title": "Hero"}], "colors": {"PRIMARY": true}}"#,
    )
    .unwrap();

    let value = stdout_json(&["check", "--config", path.to_str().unwrap(), "--format", "json"], 1);
    assert_eq!(value["checks"][0]["result"]["status"], "pass");
    assert_eq!(value["configPath"], path.to_str().unwrap());
}

#[test]
fn test_contrast_command() {
    cmd()
        .args(["contrast", "#000", "#ffffff"])
        .assert()
        .success()
        .stdout(contains("21.00:1"));

    cmd().args(["contrast", "#404040", "#ffffff"]).assert().code(1);

    let value = stdout_json(&["contrast", "#000000", "#ffffff", "--json"], 0);
    assert_eq!(value["isValidAAA"], true);
}

#[test]
fn test_contrast_rejects_bad_color() {
    cmd()
        .args(["contrast", "red", "#ffffff"])
        .assert()
        .code(3)
        .stderr(contains("red"));
}

//! Output formatting integration tests.
//!
//! Formats real audit reports and checks that every format stays well formed.

use design_preflight::cli::args::OutputFormat;
use design_preflight::cli::output::{format_status, get_formatter, JsonFormatter, JunitFormatter, OutputFormatter, Palette, TerminalFormatter};
use design_preflight::data::palette::Theme;
use design_preflight::engine::result::AuditReport;
use design_preflight::status::platform_status;
use design_preflight::{run_audit, AuditConfig};

use super::fixture;

fn report(name: &str) -> AuditReport {
    run_audit(&AuditConfig {
        design: fixture(name),
        ..AuditConfig::default()
    })
}

#[test]
fn test_terminal_groups_by_category() {
    let output = TerminalFormatter::new(false, false, false).format(&report("failing.json"));

    let color = output.find("COLOR CHECKS").unwrap();
    let layout = output.find("LAYOUT CHECKS").unwrap();
    let a11y = output.find("ACCESSIBILITY CHECKS").unwrap();
    assert!(color < layout && layout < a11y);

    assert!(output.contains("Theme: contest-dark"));
    assert!(output.contains("SUMMARY: 0 passed, 0 warnings, 7 failed, 1 skipped"));
}

#[test]
fn test_terminal_verbose_includes_card_details() {
    let output = TerminalFormatter::new(false, true, false).format(&report("failing.json"));
    assert!(output.contains("Card 1 height mismatch"));
}

#[test]
fn test_terminal_warning_line() {
    let output = TerminalFormatter::new(false, true, false).format(&report("low_contrast.json"));
    assert!(output.contains("[WARN] A11Y-001"));
    assert!(output.contains("muted caption"));
    assert!(output.contains("Exit code: 2 (warnings detected)"));
}

#[test]
fn test_json_round_trips_into_report() {
    let original = report("compliant.json");
    let output = JsonFormatter::new(false).format(&original);
    assert!(!output.contains('\n'));

    let parsed: AuditReport = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_junit_counts_per_suite() {
    let output = JunitFormatter::new().format(&report("failing.json"));
    assert!(output.contains("<testsuites tests=\"8\" failures=\"7\" errors=\"0\" skipped=\"1\">"));
    assert!(output.contains("<testsuite name=\"layout\" tests=\"4\" failures=\"3\" errors=\"0\" skipped=\"1\">"));
    assert!(output.contains("<skipped message="));
    assert_eq!(output.matches("<testcase ").count(), 8);
}

#[test]
fn test_get_formatter_selects_format() {
    let report = report("compliant.json");
    let json = get_formatter(&OutputFormat::Json, false, false, false).format(&report);
    assert!(json.trim_start().starts_with('{'));
    let junit = get_formatter(&OutputFormat::Junit, false, false, false).format(&report);
    assert!(junit.starts_with("<?xml"));
    let text = get_formatter(&OutputFormat::Text, false, false, false).format(&report);
    assert!(text.contains("SUMMARY: 7 passed"));
}

#[test]
fn test_status_panel_formats() {
    let status = platform_status(Theme::Light);
    let text = format_status(&status, false, Palette::new(false));
    assert!(text.contains("[PASS] Navigation (logged out): 3 routes, minimum 3"));
    assert!(text.contains("[PASS] Navigation (logged in): 5 routes, minimum 5"));

    let json: serde_json::Value = serde_json::from_str(&format_status(&status, true, Palette::new(false))).unwrap();
    assert_eq!(json["isDark"], false);
    assert_eq!(json["colorPalette"]["hasNeutral"], true);
}

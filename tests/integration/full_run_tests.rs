//! Full run integration tests.
//!
//! Tests for complete audit runs, including orchestration, fail-fast
//! behavior, result aggregation and baselines.

use design_preflight::config::DesignConfig;
use design_preflight::data::palette::Theme;
use design_preflight::engine::orchestrator::{create_all_checks, AuditOrchestrator, OrchestratorConfig, RegisteredCheck};
use design_preflight::engine::result::{compare_to_baseline, load_baseline, save_as_baseline, ResultAggregator};
use design_preflight::validation::validate_design_system;
use design_preflight::{run_audit, AuditConfig, CheckCategory, CheckResult};

use super::{fixture, fixture_path};

fn status_of(report: &design_preflight::Report, id: &str) -> &'static str {
    report
        .checks
        .iter()
        .find(|c| c.id == id)
        .and_then(|c| c.result.as_ref())
        .map(CheckResult::status)
        .unwrap_or("missing")
}

fn audit(name: &str) -> design_preflight::Report {
    run_audit(&AuditConfig {
        design: fixture(name),
        config_path: Some(fixture_path(name)),
        ..AuditConfig::default()
    })
}

// A check that fails when the hero band is under 50%
fn hero_floor_check() -> RegisteredCheck {
    RegisteredCheck {
        id: "TEST-001".to_string(),
        name: "Hero Floor".to_string(),
        category: CheckCategory::Layout,
        description: "Test check".to_string(),
        check_fn: Box::new(|design: &DesignConfig| {
            if design.hero_height >= 50.0 {
                CheckResult::Pass {
                    message: "tall enough".to_string(),
                }
            } else {
                CheckResult::Fail {
                    message: "too short".to_string(),
                    details: String::new(),
                }
            }
        }),
    }
}

#[test]
fn test_compliant_fixture() {
    let report = audit("compliant.json");
    let summary = report.summary();
    assert_eq!(summary.total, 8);
    assert_eq!(summary.passed, 7);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(status_of(&report, "RESP-001"), "skip");
    assert!(report.config_path.as_deref().unwrap().ends_with("compliant.json"));

    assert!(validate_design_system(&fixture("compliant.json")).is_valid);
}

#[test]
fn test_failing_fixture() {
    let report = audit("failing.json");
    for id in ["COLOR-001", "NAV-001", "HERO-001", "CONTENT-001", "GRID-001", "CARD-001", "A11Y-001"] {
        assert_eq!(status_of(&report, id), "fail", "{} should fail", id);
    }
    assert_eq!(report.theme, Theme::Dark);

    let aggregate = validate_design_system(&fixture("failing.json"));
    assert!(!aggregate.is_valid);
    assert_eq!(aggregate.summary.failed_checks, 6);
}

#[test]
fn test_low_contrast_fixture_warns() {
    let report = audit("low_contrast.json");
    assert_eq!(status_of(&report, "A11Y-001"), "warn");
    assert_eq!(report.summary().failed, 0);
    assert_eq!(report.summary().exit_code(), 2);
}

#[test]
fn test_fail_fast_stops_after_first_failure() {
    let report = run_audit(&AuditConfig {
        design: fixture("failing.json"),
        fail_fast: true,
        ..AuditConfig::default()
    });
    assert_eq!(report.checks.len(), 1);
    assert_eq!(report.checks[0].id, "COLOR-001");
}

#[test]
fn test_skip_and_unknown_ids() {
    let report = run_audit(&AuditConfig {
        design: fixture("compliant.json"),
        skip_checks: vec!["RESP-001".to_string(), "NOPE-999".to_string()],
        ..AuditConfig::default()
    });
    assert_eq!(report.checks.len(), 7);
    assert_eq!(report.summary().skipped, 0);

    let report = run_audit(&AuditConfig {
        only_checks: vec!["NOPE-999".to_string()],
        ..AuditConfig::default()
    });
    assert!(report.checks.is_empty());
    assert_eq!(report.summary().exit_code(), 0);
}

#[test]
fn test_custom_registered_check() {
    let mut orchestrator = AuditOrchestrator::new(OrchestratorConfig::default());
    orchestrator.register_check(hero_floor_check());

    let design = fixture("compliant.json");
    let report = orchestrator.run_all(&design);
    assert_eq!(status_of(&report, "TEST-001"), "pass");

    let report = orchestrator.run_all(&DesignConfig::default());
    assert_eq!(status_of(&report, "TEST-001"), "fail");
}

#[test]
fn test_registered_checks_are_unique() {
    let checks = create_all_checks();
    let mut ids: Vec<&str> = checks.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), checks.len());

    for category in CheckCategory::ALL {
        assert!(checks.iter().any(|c| c.category == category), "no check for {}", category);
    }
}

#[test]
fn test_audit_is_idempotent() {
    assert_eq!(audit("failing.json"), audit("failing.json"));
}

#[test]
fn test_aggregator_collects_report() {
    let mut aggregator = ResultAggregator::new(Theme::Light);
    for check in audit("failing.json").checks {
        aggregator.add_result(check);
    }
    assert!(aggregator.has_failures());
    let summary = aggregator.into_report().summary();
    assert_eq!(summary.failed, 7);
    assert_eq!(summary.warned, 0);
    assert_eq!(summary.total, 8);
}

#[test]
fn test_baseline_comparison_across_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    let path = path.to_str().unwrap();

    save_as_baseline(&audit("compliant.json"), path).unwrap();
    let baseline = load_baseline(path).unwrap();

    let comparison = compare_to_baseline(&audit("low_contrast.json"), &baseline);
    assert_eq!(comparison.new_warnings, vec!["A11Y-001"]);
    assert!(comparison.regressions.is_empty());
    assert!(!comparison.has_regressions());

    let comparison = compare_to_baseline(&audit("failing.json"), &baseline);
    assert_eq!(comparison.regressions.len(), 7);
    assert_eq!(comparison.unchanged, vec!["RESP-001"]);
    assert!(comparison.has_regressions());
}

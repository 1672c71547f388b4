//! Result aggregation and reporting.
//!
//! Collects check results, generates summaries, and supports baseline comparison.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

use crate::data::palette::Theme;
use crate::{Check, CheckCategory, CheckResult, DesignPreflightError};

/// Result summary statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub passed: u32,
    pub warned: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
}

impl ResultSummary {
    /// Process exit code: 1 on failures, 2 on warnings only, 0 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

fn summarize<'a>(checks: impl IntoIterator<Item = &'a Check>) -> ResultSummary {
    let mut summary = ResultSummary::default();

    for check in checks {
        summary.total += 1;

        match &check.result {
            Some(CheckResult::Pass { .. }) => summary.passed += 1,
            Some(CheckResult::Warn { .. }) => summary.warned += 1,
            Some(CheckResult::Fail { .. }) => summary.failed += 1,
            Some(CheckResult::Skip { .. }) | None => summary.skipped += 1,
        }
    }

    summary
}

/// Audit report containing all check results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    pub checks: Vec<Check>,
}

impl AuditReport {
    /// Create a new empty report
    pub fn new(theme: Theme) -> Self {
        AuditReport {
            config_path: None,
            theme,
            checks: Vec::new(),
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        summarize(&self.checks)
    }

    /// Checks in a category, in run order
    pub fn by_category(&self, category: CheckCategory) -> Vec<&Check> {
        self.checks.iter().filter(|c| c.category == category).collect()
    }
}

/// Baseline comparison result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub new_failures: Vec<String>,
    pub new_warnings: Vec<String>,
    pub resolved: Vec<String>,
    pub regressions: Vec<String>,
    pub unchanged: Vec<String>,
}

impl ComparisonResult {
    /// Whether anything got worse since the baseline
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty() || !self.new_failures.is_empty()
    }
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    checks: Vec<Check>,
    theme: Theme,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new(theme: Theme) -> Self {
        ResultAggregator {
            checks: Vec::new(),
            theme,
        }
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(&c.result, Some(CheckResult::Fail { .. })))
    }

    /// Create final audit report
    pub fn into_report(self) -> AuditReport {
        AuditReport {
            config_path: None,
            theme: self.theme,
            checks: self.checks,
        }
    }
}

/// Compare a report against a baseline report
pub fn compare_to_baseline(current: &AuditReport, baseline: &AuditReport) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    let baseline_results: HashMap<&str, &CheckResult> = baseline
        .checks
        .iter()
        .filter_map(|c| c.result.as_ref().map(|r| (c.id.as_str(), r)))
        .collect();

    for check in &current.checks {
        let current_status = check.result.as_ref().map(CheckResult::status);
        let baseline_status = baseline_results.get(check.id.as_str()).map(|r| r.status());

        match (baseline_status, current_status) {
            (Some("pass"), Some("fail")) => result.regressions.push(check.id.clone()),
            (Some("pass"), Some("warn")) => result.new_warnings.push(check.id.clone()),
            (Some("fail"), Some("pass")) | (Some("warn"), Some("pass")) => {
                result.resolved.push(check.id.clone())
            }
            (None, Some("fail")) => result.new_failures.push(check.id.clone()),
            (None, Some("warn")) => result.new_warnings.push(check.id.clone()),
            _ => result.unchanged.push(check.id.clone()),
        }
    }

    debug!(
        "baseline comparison: {} regressions, {} new failures, {} resolved",
        result.regressions.len(),
        result.new_failures.len(),
        result.resolved.len()
    );

    result
}

/// Save an audit report as JSON baseline
pub fn save_as_baseline(report: &AuditReport, path: &str) -> Result<(), DesignPreflightError> {
    let json = serde_json::to_string_pretty(report)?;

    fs::write(path, json).map_err(|source| DesignPreflightError::Io {
        path: path.to_string(),
        source,
    })
}

/// Load an audit report from JSON baseline
pub fn load_baseline(path: &str) -> Result<AuditReport, DesignPreflightError> {
    let content = fs::read_to_string(path).map_err(|source| DesignPreflightError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DesignPreflightError::Parse {
        path: path.to_string(),
        source,
    })
}

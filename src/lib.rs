//! design-preflight library
//!
//! Design-system compliance checks for the contest platform front-end.
//!
//! This library provides:
//! - Pure validators for the color palette, navigation, hero height, content
//!   sections, contest grid, card consistency and color contrast
//! - An aggregate validator combining the structural checks into one report
//! - A check engine that runs validators as identified checks (`COLOR-001`, ...)
//!   and produces a report with a summary and baseline comparison
//! - Terminal, JSON and JUnit XML output
//!
//! # Example
//!
//! ```no_run
//! use design_preflight::{run_audit, AuditConfig};
//!
//! let config = AuditConfig::default();
//! let report = run_audit(&config);
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod status;
pub mod validation;
pub mod version;

use cli::args::CheckArgs;
use config::{load_config, DesignConfig};
use data::palette::Theme;
use engine::orchestrator::{create_all_checks, AuditOrchestrator, OrchestratorConfig};
use engine::result::AuditReport;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Re-exports for public API
pub use engine::orchestrator::AuditOrchestrator as Orchestrator;
pub use engine::result::{AuditReport as Report, ResultSummary};
pub use validation::{validate_design_system, DesignSystemReport};

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckResult {
    /// Check passed
    Pass { message: String },
    /// Check passed with reservations
    Warn { message: String, details: String },
    /// Check failed
    Fail { message: String, details: String },
    /// Check could not be evaluated
    Skip { reason: String },
}

impl CheckResult {
    /// Short status name used in reports and baselines
    pub fn status(&self) -> &'static str {
        match self {
            CheckResult::Pass { .. } => "pass",
            CheckResult::Warn { .. } => "warn",
            CheckResult::Fail { .. } => "fail",
            CheckResult::Skip { .. } => "skip",
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message } => write!(f, "PASS: {}", message),
            CheckResult::Warn { message, details } => {
                write!(f, "WARN: {} ({})", message, details)
            }
            CheckResult::Fail { message, details } => {
                write!(f, "FAIL: {} ({})", message, details)
            }
            CheckResult::Skip { reason } => write!(f, "SKIP: {}", reason),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Palette budget
    Color,
    /// Navbar route counts
    Navigation,
    /// Hero, content sections, grid and responsive behavior
    Layout,
    /// Contest card dimensions
    Cards,
    /// Color contrast
    Accessibility,
}

impl CheckCategory {
    /// All categories in report order
    pub const ALL: [CheckCategory; 5] = [
        CheckCategory::Color,
        CheckCategory::Navigation,
        CheckCategory::Layout,
        CheckCategory::Cards,
        CheckCategory::Accessibility,
    ];

    /// Lowercase identifier used by `--category` and JUnit suite names
    pub fn key(&self) -> &'static str {
        match self {
            CheckCategory::Color => "color",
            CheckCategory::Navigation => "navigation",
            CheckCategory::Layout => "layout",
            CheckCategory::Cards => "cards",
            CheckCategory::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Color => write!(f, "Color"),
            CheckCategory::Navigation => write!(f, "Navigation"),
            CheckCategory::Layout => write!(f, "Layout"),
            CheckCategory::Cards => write!(f, "Cards"),
            CheckCategory::Accessibility => write!(f, "Accessibility"),
        }
    }
}

/// A check with its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Unique identifier (e.g., "COLOR-001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Description of what this check validates
    pub description: String,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

/// Error types for design-preflight operations.
#[derive(Debug, Error)]
pub enum DesignPreflightError {
    /// A file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A config or baseline file is not valid JSON for its schema
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// A report could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// A color string is not a supported hex color
    #[error(transparent)]
    InvalidColor(#[from] validation::ColorParseError),
}

/// Configuration for an audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// Design settings under test
    pub design: DesignConfig,
    /// Path the design settings were loaded from, if any
    pub config_path: Option<String>,
    /// Categories to run (None = all)
    pub categories: Option<Vec<CheckCategory>>,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
    /// Stop on first failure
    pub fail_fast: bool,
}

impl AuditConfig {
    /// Create configuration from `check` arguments, loading the config file if given
    pub fn from_args(args: &CheckArgs) -> Result<Self, DesignPreflightError> {
        let mut design = match &args.config {
            Some(path) => load_config(path)?,
            None => DesignConfig::default(),
        };

        if let Some(theme) = args.theme {
            design.theme = Theme::from(theme);
        }

        let categories = if args.category.is_empty() {
            None
        } else {
            Some(args.category.iter().map(|c| CheckCategory::from(*c)).collect())
        };

        Ok(AuditConfig {
            design,
            config_path: args.config.clone(),
            categories,
            skip_checks: args.skip.clone(),
            only_checks: args.only.clone(),
            fail_fast: args.fail_fast,
        })
    }
}

/// Run the audit.
///
/// Check selection follows the same precedence as the CLI: `only_checks`
/// first, then `skip_checks`, then `categories`, otherwise everything.
///
/// # Example
///
/// ```no_run
/// use design_preflight::{run_audit, AuditConfig, CheckCategory};
///
/// // Run only accessibility checks
/// let config = AuditConfig {
///     categories: Some(vec![CheckCategory::Accessibility]),
///     ..Default::default()
/// };
///
/// let summary = run_audit(&config).summary();
/// println!("Passed: {}, Failed: {}", summary.passed, summary.failed);
/// ```
pub fn run_audit(config: &AuditConfig) -> AuditReport {
    let orch_config = OrchestratorConfig {
        fail_fast: config.fail_fast,
    };

    let mut orchestrator = AuditOrchestrator::new(orch_config);
    orchestrator.register_checks(create_all_checks());

    let mut report = if !config.only_checks.is_empty() {
        orchestrator.run_specific(&config.design, &config.only_checks)
    } else if !config.skip_checks.is_empty() {
        orchestrator.run_excluding(&config.design, &config.skip_checks)
    } else if let Some(ref categories) = config.categories {
        if categories.is_empty() {
            orchestrator.run_all(&config.design)
        } else {
            orchestrator.run_categories(&config.design, categories)
        }
    } else {
        orchestrator.run_all(&config.design)
    };

    report.config_path = config.config_path.clone();
    report
}

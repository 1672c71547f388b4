//! Check execution orchestrator.
//!
//! Manages check registration and execution against a design config.
//!
//! # Graceful Degradation
//!
//! - Invalid check ID: silently skipped in run_specific/run_excluding
//! - Empty check list: returns empty report (not an error)
//! - Unparseable contrast colors: reported as a failed check, not an error
//!
//! All registered checks complete regardless of individual failures, unless
//! fail_fast is enabled. Checks run sequentially in registration order.

use log::{debug, info};

use crate::config::DesignConfig;
use crate::data::policy::{CONTRAST_AA_LARGE, CONTRAST_AA_NORMAL};
use crate::engine::result::{AuditReport, ResultAggregator};
use crate::validation::{
    validate_card_consistency, validate_color_palette, validate_content_sections, validate_contest_grid,
    validate_contrast_ratio, validate_hero_height, validate_navigation_routes, validate_responsive_layout,
};
use crate::{Check, CheckCategory, CheckResult};

/// Orchestrator configuration
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    pub fail_fast: bool,
}

/// Signature of a registered check
pub type CheckFn = Box<dyn Fn(&DesignConfig) -> CheckResult + Send + Sync>;

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub description: String,
    pub check_fn: CheckFn,
}

impl RegisteredCheck {
    fn run(&self, design: &DesignConfig) -> Check {
        Check {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            result: Some((self.check_fn)(design)),
        }
    }
}

/// Check orchestrator
pub struct AuditOrchestrator {
    config: OrchestratorConfig,
    checks: Vec<RegisteredCheck>,
}

impl AuditOrchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: OrchestratorConfig) -> Self {
        AuditOrchestrator {
            config,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// Run all registered checks
    pub fn run_all(&self, design: &DesignConfig) -> AuditReport {
        self.run_filtered(design, |_| true)
    }

    /// Run checks in a specific category
    pub fn run_category(&self, design: &DesignConfig, category: CheckCategory) -> AuditReport {
        self.run_filtered(design, |c| c.category == category)
    }

    /// Run checks in multiple categories
    pub fn run_categories(&self, design: &DesignConfig, categories: &[CheckCategory]) -> AuditReport {
        self.run_filtered(design, |c| categories.contains(&c.category))
    }

    /// Run specific checks by ID
    pub fn run_specific(&self, design: &DesignConfig, check_ids: &[String]) -> AuditReport {
        self.run_filtered(design, |c| check_ids.contains(&c.id))
    }

    /// Run all checks except specified IDs
    pub fn run_excluding(&self, design: &DesignConfig, skip_ids: &[String]) -> AuditReport {
        self.run_filtered(design, |c| !skip_ids.contains(&c.id))
    }

    fn run_filtered<F>(&self, design: &DesignConfig, selected: F) -> AuditReport
    where
        F: Fn(&RegisteredCheck) -> bool,
    {
        let mut aggregator = ResultAggregator::new(design.theme);

        for check in self.checks.iter().filter(|c| selected(*c)) {
            let executed = check.run(design);
            if let Some(ref result) = executed.result {
                debug!("{} {}: {}", check.id, check.name, result);
            }
            aggregator.add_result(executed);

            if self.config.fail_fast && aggregator.has_failures() {
                info!("stopping after {} failed (fail-fast)", check.id);
                break;
            }
        }

        let report = aggregator.into_report();
        let summary = report.summary();
        info!(
            "ran {} checks: {} passed, {} warnings, {} failed, {} skipped",
            summary.total, summary.passed, summary.warned, summary.failed, summary.skipped
        );
        report
    }
}

fn pass_or_fail(is_valid: bool, message: String, details: String) -> CheckResult {
    if is_valid {
        CheckResult::Pass { message }
    } else {
        CheckResult::Fail { message, details }
    }
}

/// COLOR-001: palette budget
pub fn check_color_palette(design: &DesignConfig) -> CheckResult {
    let result = validate_color_palette(&design.colors);
    let neutral = if result.has_neutral { "with neutral" } else { "no neutral" };
    pass_or_fail(
        result.is_valid,
        format!("{}/{} primary colors ({})", result.count, result.max_allowed, neutral),
        format!(
            "{} primary colors defined, at most {} allowed",
            result.count, result.max_allowed
        ),
    )
}

/// NAV-001: navbar route count
pub fn check_navigation(design: &DesignConfig) -> CheckResult {
    let result = validate_navigation_routes(&design.routes, design.is_authenticated);
    let audience = if result.is_authenticated { "signed-in" } else { "visitor" };
    pass_or_fail(
        result.is_valid,
        format!("{} {} routes (minimum {})", result.count, audience, result.min_required),
        format!(
            "{} navigation needs at least {} routes, found {}",
            audience, result.min_required, result.count
        ),
    )
}

/// HERO-001: hero height band
pub fn check_hero_height(design: &DesignConfig) -> CheckResult {
    let result = validate_hero_height(design.hero_height);
    pass_or_fail(
        result.is_valid,
        format!("Hero height {}% of viewport", result.height),
        format!(
            "Hero height must be between {}% and {}%",
            result.min_required, result.max_allowed
        ),
    )
}

/// CONTENT-001: landing page section count
pub fn check_content_sections(design: &DesignConfig) -> CheckResult {
    let result = validate_content_sections(&design.sections);
    pass_or_fail(
        result.is_valid,
        format!("{} content sections (minimum {})", result.count, result.min_required),
        format!(
            "{} more sections needed",
            result.min_required.saturating_sub(result.count)
        ),
    )
}

/// GRID-001: cards per row for the viewport
pub fn check_contest_grid(design: &DesignConfig) -> CheckResult {
    let result = validate_contest_grid(design.cards_per_row, design.viewport_width);
    pass_or_fail(
        result.is_valid,
        format!("{} cards per row at {}px", result.actual, result.viewport_width),
        format!(
            "Expected {} cards per row at {}px, found {}",
            result.expected, result.viewport_width, result.actual
        ),
    )
}

/// CARD-001: identical card dimensions
pub fn check_card_consistency(design: &DesignConfig) -> CheckResult {
    let result = validate_card_consistency(&design.cards);
    let inconsistencies = result.inconsistencies();

    if result.is_valid() {
        CheckResult::Pass {
            message: format!("{} cards share dimensions", design.cards.len()),
        }
    } else {
        CheckResult::Fail {
            message: format!("{} card dimension mismatches", inconsistencies.len()),
            details: inconsistencies
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// A11Y-001: contrast of configured color pairs
///
/// Fails when a pair is below the large-text threshold or cannot be parsed,
/// warns when a pair only meets the large-text threshold.
pub fn check_contrast(design: &DesignConfig) -> CheckResult {
    if design.contrast_pairs.is_empty() {
        return CheckResult::Skip {
            reason: "No contrast pairs configured".to_string(),
        };
    }

    let mut failures = Vec::new();
    let mut large_only = Vec::new();
    let mut min_ratio = f64::INFINITY;

    for pair in &design.contrast_pairs {
        let foreground = design.resolve_color(&pair.foreground);
        let background = design.resolve_color(&pair.background);

        match validate_contrast_ratio(foreground, background) {
            Ok(result) => {
                min_ratio = min_ratio.min(result.ratio);
                if !result.is_valid_large {
                    failures.push(format!("{}: {:.2}:1", pair.display_name(), result.ratio));
                } else if !result.is_valid_normal {
                    large_only.push(format!("{}: {:.2}:1", pair.display_name(), result.ratio));
                }
            }
            Err(err) => failures.push(format!("{}: {}", pair.display_name(), err)),
        }
    }

    let count = design.contrast_pairs.len();
    if !failures.is_empty() {
        CheckResult::Fail {
            message: format!("{} of {} color pairs below {}:1", failures.len(), count, CONTRAST_AA_LARGE),
            details: failures.join("; "),
        }
    } else if !large_only.is_empty() {
        CheckResult::Warn {
            message: format!(
                "{} of {} color pairs only meet large-text contrast",
                large_only.len(),
                count
            ),
            details: format!("below {}:1: {}", CONTRAST_AA_NORMAL, large_only.join("; ")),
        }
    } else {
        CheckResult::Pass {
            message: format!("{} color pairs, lowest ratio {:.2}:1", count, min_ratio),
        }
    }
}

/// RESP-001: responsive layout (not measurable without a renderer)
pub fn check_responsive_layout(design: &DesignConfig) -> CheckResult {
    let layouts = validate_responsive_layout("body", &design.viewports);
    CheckResult::Skip {
        reason: format!(
            "Layout measurement needs a rendering environment ({} viewports not measured)",
            layouts.len()
        ),
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck {
            id: "COLOR-001".to_string(),
            name: "Color Palette".to_string(),
            category: CheckCategory::Color,
            description: "At most 3 primary colors plus an optional neutral".to_string(),
            check_fn: Box::new(check_color_palette),
        },
        RegisteredCheck {
            id: "NAV-001".to_string(),
            name: "Navigation Routes".to_string(),
            category: CheckCategory::Navigation,
            description: "At least 3 routes for visitors, 5 for signed-in users".to_string(),
            check_fn: Box::new(check_navigation),
        },
        RegisteredCheck {
            id: "HERO-001".to_string(),
            name: "Hero Height".to_string(),
            category: CheckCategory::Layout,
            description: "Hero section between 60% and 70% of the viewport".to_string(),
            check_fn: Box::new(check_hero_height),
        },
        RegisteredCheck {
            id: "CONTENT-001".to_string(),
            name: "Content Sections".to_string(),
            category: CheckCategory::Layout,
            description: "At least 10 meaningful content sections".to_string(),
            check_fn: Box::new(check_content_sections),
        },
        RegisteredCheck {
            id: "GRID-001".to_string(),
            name: "Contest Grid".to_string(),
            category: CheckCategory::Layout,
            description: "Cards per row match the viewport breakpoint".to_string(),
            check_fn: Box::new(check_contest_grid),
        },
        RegisteredCheck {
            id: "CARD-001".to_string(),
            name: "Card Consistency".to_string(),
            category: CheckCategory::Cards,
            description: "Contest cards share height, width and border radius".to_string(),
            check_fn: Box::new(check_card_consistency),
        },
        RegisteredCheck {
            id: "A11Y-001".to_string(),
            name: "Color Contrast".to_string(),
            category: CheckCategory::Accessibility,
            description: "Text/background pairs meet contrast thresholds".to_string(),
            check_fn: Box::new(check_contrast),
        },
        RegisteredCheck {
            id: "RESP-001".to_string(),
            name: "Responsive Layout".to_string(),
            category: CheckCategory::Layout,
            description: "No horizontal scroll or overflow at configured viewports".to_string(),
            check_fn: Box::new(check_responsive_layout),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContrastPair, Viewport};
    use crate::data::palette::Theme;

    fn orchestrator(fail_fast: bool) -> AuditOrchestrator {
        let mut orch = AuditOrchestrator::new(OrchestratorConfig { fail_fast });
        orch.register_checks(create_all_checks());
        orch
    }

    fn design_with_pairs(pairs: Vec<ContrastPair>) -> DesignConfig {
        DesignConfig {
            contrast_pairs: pairs,
            ..DesignConfig::default()
        }
    }

    #[test]
    fn test_check_ids_are_unique() {
        let checks = create_all_checks();
        let mut ids: Vec<_> = checks.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), checks.len());
    }

    #[test]
    fn test_run_all_preserves_order() {
        let report = orchestrator(false).run_all(&DesignConfig::default());
        let ids: Vec<_> = report.checks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["COLOR-001", "NAV-001", "HERO-001", "CONTENT-001", "GRID-001", "CARD-001", "A11Y-001", "RESP-001"]
        );
    }

    #[test]
    fn test_fail_fast_stops_after_first_failure() {
        let report = orchestrator(true).run_all(&DesignConfig::default());
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.checks[1].id, "NAV-001");
    }

    #[test]
    fn test_run_category() {
        let report = orchestrator(false).run_category(&DesignConfig::default(), CheckCategory::Layout);
        assert_eq!(report.checks.len(), 4);
    }

    #[test]
    fn test_run_specific_ignores_unknown_ids() {
        let ids = vec!["GRID-001".to_string(), "NOPE-999".to_string()];
        let report = orchestrator(false).run_specific(&DesignConfig::default(), &ids);
        assert_eq!(report.checks.len(), 1);
    }

    #[test]
    fn test_run_excluding() {
        let ids = vec!["A11Y-001".to_string(), "RESP-001".to_string()];
        let report = orchestrator(false).run_excluding(&DesignConfig::default(), &ids);
        assert_eq!(report.checks.len(), 6);
    }

    #[test]
    fn test_report_carries_theme() {
        let design = DesignConfig {
            theme: Theme::Dark,
            ..DesignConfig::default()
        };
        assert_eq!(orchestrator(false).run_all(&design).theme, Theme::Dark);
    }

    #[test]
    fn test_contrast_skips_without_pairs() {
        assert!(matches!(check_contrast(&DesignConfig::default()), CheckResult::Skip { .. }));
    }

    #[test]
    fn test_contrast_pass() {
        let design = design_with_pairs(vec![ContrastPair::new("#000000", "#ffffff")]);
        assert!(matches!(check_contrast(&design), CheckResult::Pass { .. }));
    }

    #[test]
    fn test_contrast_warns_for_large_text_only() {
        // about 3.09:1 with the uncorrected luminance
        let design = design_with_pairs(vec![ContrastPair::new("#4a4a4a", "#ffffff")]);
        match check_contrast(&design) {
            CheckResult::Warn { details, .. } => assert!(details.contains("#4a4a4a on #ffffff")),
            other => panic!("expected warning, got {:?}", other),
        }
    }

    #[test]
    fn test_contrast_fails_on_low_ratio_and_bad_colors() {
        let design = design_with_pairs(vec![
            ContrastPair::new("#eeeeee", "#ffffff"),
            ContrastPair::new("teal", "#ffffff"),
        ]);
        match check_contrast(&design) {
            CheckResult::Fail { message, details } => {
                assert!(message.starts_with("2 of 2"));
                assert!(details.contains("teal"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_contrast_resolves_palette_roles() {
        let design = design_with_pairs(vec![ContrastPair::new("NEUTRAL", "NEUTRAL")]);
        assert!(matches!(check_contrast(&design), CheckResult::Fail { .. }));
    }

    #[test]
    fn test_responsive_is_skipped() {
        let design = DesignConfig {
            viewports: vec![Viewport { width: 375, height: 667 }],
            ..DesignConfig::default()
        };
        match check_responsive_layout(&design) {
            CheckResult::Skip { reason } => assert!(reason.contains("1 viewports")),
            other => panic!("expected skip, got {:?}", other),
        }
    }

    #[test]
    fn test_card_mismatch_details() {
        use crate::validation::CardDescriptor;
        let design = DesignConfig {
            cards: vec![CardDescriptor::new(10.0, 10.0, 4.0), CardDescriptor::new(10.0, 10.0, 8.0)],
            ..DesignConfig::default()
        };
        match check_card_consistency(&design) {
            CheckResult::Fail { details, .. } => assert_eq!(details, "Card 1 border radius mismatch"),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}

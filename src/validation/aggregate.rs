//! Combined design-system validation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DesignConfig;
use crate::validation::cards::{validate_card_consistency, CardConsistencyResult};
use crate::validation::layout::{
    validate_content_sections, validate_contest_grid, validate_hero_height, ContentSectionsResult,
    ContestGridResult, HeroHeightResult,
};
use crate::validation::navigation::{validate_navigation_routes, NavigationResult};
use crate::validation::palette::{validate_color_palette, ColorPaletteResult};

/// Individual results of the combined validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemResults {
    pub color_palette: ColorPaletteResult,
    pub navigation: NavigationResult,
    pub hero_height: HeroHeightResult,
    pub content_sections: ContentSectionsResult,
    pub contest_grid: ContestGridResult,
    pub card_consistency: CardConsistencyResult,
}

impl DesignSystemResults {
    /// Validity of each check, in declaration order
    pub fn validity(&self) -> [bool; 6] {
        [
            self.color_palette.is_valid,
            self.navigation.is_valid,
            self.hero_height.is_valid,
            self.content_sections.is_valid,
            self.contest_grid.is_valid,
            self.card_consistency.is_valid(),
        ]
    }
}

/// Pass/fail counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemSummary {
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
}

/// Outcome of [`validate_design_system`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemReport {
    pub is_valid: bool,
    pub results: DesignSystemResults,
    pub summary: DesignSystemSummary,
}

/// Run the palette, navigation, hero, content, grid and card checks.
///
/// Contrast and responsive layout are not part of this pass; the audit
/// engine runs them separately.
pub fn validate_design_system(config: &DesignConfig) -> DesignSystemReport {
    let results = DesignSystemResults {
        color_palette: validate_color_palette(&config.colors),
        navigation: validate_navigation_routes(&config.routes, config.is_authenticated),
        hero_height: validate_hero_height(config.hero_height),
        content_sections: validate_content_sections(&config.sections),
        contest_grid: validate_contest_grid(config.cards_per_row, config.viewport_width),
        card_consistency: validate_card_consistency(&config.cards),
    };

    let validity = results.validity();
    let passed_checks = validity.iter().filter(|valid| **valid).count();
    let summary = DesignSystemSummary {
        total_checks: validity.len(),
        passed_checks,
        failed_checks: validity.len() - passed_checks,
    };

    debug!(
        "design system: {}/{} checks passed",
        summary.passed_checks, summary.total_checks
    );

    DesignSystemReport {
        is_valid: summary.failed_checks == 0,
        results,
        summary,
    }
}

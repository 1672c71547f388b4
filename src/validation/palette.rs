//! Color palette budget check.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::palette::ColorPalette;
use crate::data::policy::{MAX_PRIMARY_COLORS, NEUTRAL_ROLE};

/// Outcome of [`validate_color_palette`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPaletteResult {
    pub is_valid: bool,
    pub count: usize,
    pub max_allowed: usize,
    pub has_neutral: bool,
}

/// Count defined non-neutral roles against the primary color budget.
pub fn validate_color_palette(colors: &ColorPalette) -> ColorPaletteResult {
    let count = colors
        .defined_roles()
        .filter(|(role, _)| *role != NEUTRAL_ROLE)
        .count();
    let has_neutral = colors.get(NEUTRAL_ROLE).is_some();

    debug!("color palette: {} primary roles, neutral={}", count, has_neutral);

    ColorPaletteResult {
        is_valid: count <= MAX_PRIMARY_COLORS,
        count,
        max_allowed: MAX_PRIMARY_COLORS,
        has_neutral,
    }
}

//! Design system status of the platform itself.
//!
//! Validates the built-in palette and the navbar route sets, the same
//! numbers the front-end shows on its design-system status panel.

use serde::Serialize;

use crate::data::palette::{ColorPalette, Theme};
use crate::data::policy::{MEMBER_ROUTES, PUBLIC_ROUTES};
use crate::validation::{validate_color_palette, validate_navigation_routes, ColorPaletteResult, NavigationResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStatus {
    pub theme: Theme,
    pub is_dark: bool,
    pub color_palette: ColorPaletteResult,
    pub navigation_logged_out: NavigationResult,
    pub navigation_logged_in: NavigationResult,
}

impl PlatformStatus {
    pub fn is_valid(&self) -> bool {
        self.color_palette.is_valid && self.navigation_logged_out.is_valid && self.navigation_logged_in.is_valid
    }
}

pub fn platform_status(theme: Theme) -> PlatformStatus {
    PlatformStatus {
        theme,
        is_dark: theme.is_dark(),
        color_palette: validate_color_palette(&ColorPalette::design_system()),
        navigation_logged_out: validate_navigation_routes(&PUBLIC_ROUTES, false),
        navigation_logged_in: validate_navigation_routes(&MEMBER_ROUTES, true),
    }
}

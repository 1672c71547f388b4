//! Design configuration input.
//!
//! A `DesignConfig` is the snapshot of live front-end settings the checks run
//! against. It is read from JSON with camelCase keys; every key is optional and
//! falls back to the default documented on the field. An explicit `null`
//! reads the same as a missing key.

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::data::palette::{ColorPalette, Theme};
use crate::validation::cards::CardDescriptor;
use crate::DesignPreflightError;

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// `"{width}x{height}"`
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Text/background color pair to check for contrast.
///
/// Each side is a hex color or the name of a palette role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub foreground: String,
    pub background: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ContrastPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        ContrastPair {
            foreground: foreground.into(),
            background: background.into(),
            label: None,
        }
    }

    /// Label used in reports
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} on {}", self.foreground, self.background),
        }
    }
}

/// Snapshot of the front-end design settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignConfig {
    /// Palette roles. Defaults to the platform palette.
    #[serde(deserialize_with = "palette_or_design_system")]
    pub colors: ColorPalette,
    /// Navbar routes, in any shape; only the count is checked. Default: none.
    #[serde(deserialize_with = "null_as_default")]
    pub routes: Vec<Value>,
    /// Whether `routes` is the signed-in navbar. Default: false.
    #[serde(deserialize_with = "null_as_default")]
    pub is_authenticated: bool,
    /// Hero height in percent of the viewport. Default: 0, which fails.
    #[serde(deserialize_with = "null_as_default")]
    pub hero_height: f64,
    /// Landing page content sections, in any shape; only the count is checked. Default: none.
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<Value>,
    /// Contest cards per grid row. Default: 0.
    #[serde(deserialize_with = "null_as_default")]
    pub cards_per_row: u32,
    /// Viewport width in px the grid was measured at. Default: 0.
    #[serde(deserialize_with = "null_as_default")]
    pub viewport_width: u32,
    /// Rendered contest cards. Default: none.
    #[serde(deserialize_with = "null_as_default")]
    pub cards: Vec<CardDescriptor>,
    /// Theme used to resolve palette roles. Default: light.
    #[serde(deserialize_with = "null_as_default")]
    pub theme: Theme,
    /// Color pairs for the contrast check. Default: none.
    #[serde(deserialize_with = "null_as_default")]
    pub contrast_pairs: Vec<ContrastPair>,
    /// Viewports for the responsive layout check. Default: none.
    #[serde(deserialize_with = "null_as_default")]
    pub viewports: Vec<Viewport>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn palette_or_design_system<'de, D>(deserializer: D) -> Result<ColorPalette, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ColorPalette>::deserialize(deserializer)?.unwrap_or_else(ColorPalette::design_system))
}

impl Default for DesignConfig {
    fn default() -> Self {
        DesignConfig {
            colors: ColorPalette::design_system(),
            routes: Vec::new(),
            is_authenticated: false,
            hero_height: 0.0,
            sections: Vec::new(),
            cards_per_row: 0,
            viewport_width: 0,
            cards: Vec::new(),
            theme: Theme::default(),
            contrast_pairs: Vec::new(),
            viewports: Vec::new(),
        }
    }
}

impl DesignConfig {
    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a contrast pair side to a concrete color string
    pub fn resolve_color<'a>(&'a self, reference: &'a str) -> &'a str {
        self.colors.resolve(reference, self.theme)
    }

    /// Warn about settings that will make checks fail only because they were left out
    fn warn_on_missing(&self) {
        if self.routes.is_empty() {
            warn!("config has no routes; the navigation check will fail");
        }
        if self.hero_height == 0.0 {
            warn!("config has no heroHeight; the hero height check will fail");
        }
        if self.viewport_width == 0 {
            warn!("config has no viewportWidth; grid expectations use the smallest tier");
        }
    }
}

/// Load a design config from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<DesignConfig, DesignPreflightError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DesignPreflightError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config = DesignConfig::from_json(&content).map_err(|source| DesignPreflightError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    debug!(
        "loaded config {}: {} routes, {} sections, {} cards, {} contrast pairs",
        path.display(),
        config.routes.len(),
        config.sections.len(),
        config.cards.len(),
        config.contrast_pairs.len()
    );
    config.warn_on_missing();

    Ok(config)
}

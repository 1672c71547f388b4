//! Platform color palette and themes.
//!
//! The palette maps color roles (PRIMARY, SECONDARY, ...) to either a single
//! hex value or a light/dark pair. Themes are plain values handed to whoever
//! needs them; nothing here holds "the current theme".

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "contest-light", alias = "light")]
    Light,
    #[serde(rename = "contest-dark", alias = "dark")]
    Dark,
}

impl Theme {
    /// The `data-theme` attribute value
    pub fn data_theme(&self) -> &'static str {
        match self {
            Theme::Light => "contest-light",
            Theme::Dark => "contest-dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Pick the initial theme: any saved choice wins over the system preference.
    ///
    /// A saved value that names no known theme still wins, and renders as
    /// the light theme. An empty saved value counts as no choice.
    pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved.filter(|s| !s.is_empty()) {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                warn!("saved theme '{}' is not a known theme, using {}", saved, Theme::Light);
                Theme::Light
            }),
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data_theme())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "contest-light" => Ok(Theme::Light),
            "dark" | "contest-dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: '{}'. Valid themes: light, dark", s)),
        }
    }
}

/// A color with a variant per theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedColor {
    #[serde(default)]
    pub light: String,
    #[serde(default)]
    pub dark: String,
}

/// Value assigned to a palette role
///
/// Any JSON object reads as `Themed`; numbers, booleans and arrays land in
/// `Other` so a loosely typed palette still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Themed(ThemedColor),
    Other(Value),
}

impl ColorValue {
    /// Whether the role counts as set, following JSON truthiness:
    /// empty strings, `false`, `0` and `null` are unset, every object is set.
    pub fn is_defined(&self) -> bool {
        match self {
            ColorValue::Hex(hex) => !hex.is_empty(),
            ColorValue::Themed(_) => true,
            ColorValue::Other(value) => is_truthy(value),
        }
    }

    /// Resolve the color for a theme. Non-color values resolve to `""`.
    pub fn for_theme(&self, theme: Theme) -> &str {
        match self {
            ColorValue::Hex(hex) => hex,
            ColorValue::Themed(themed) => match theme {
                Theme::Light => &themed.light,
                Theme::Dark => &themed.dark,
            },
            ColorValue::Other(_) => "",
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Mapping from color role to value. Roles set to `null` are kept but count as undefined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette(BTreeMap<String, Option<ColorValue>>);

impl ColorPalette {
    pub fn new() -> Self {
        ColorPalette(BTreeMap::new())
    }

    /// The contest platform palette: three primary roles plus neutral.
    pub fn design_system() -> Self {
        let mut palette = ColorPalette::new();
        palette.insert_themed("PRIMARY", "#3b82f6", "#60a5fa");
        palette.insert_themed("SECONDARY", "#10b981", "#34d399");
        palette.insert_themed("ACCENT", "#f59e0b", "#fbbf24");
        palette.insert_themed("NEUTRAL", "#6b7280", "#9ca3af");
        palette
    }

    pub fn insert(&mut self, role: impl Into<String>, value: Option<ColorValue>) {
        self.0.insert(role.into(), value);
    }

    pub fn insert_hex(&mut self, role: impl Into<String>, hex: impl Into<String>) {
        self.insert(role, Some(ColorValue::Hex(hex.into())));
    }

    pub fn insert_themed(&mut self, role: impl Into<String>, light: &str, dark: &str) {
        self.insert(
            role,
            Some(ColorValue::Themed(ThemedColor {
                light: light.to_string(),
                dark: dark.to_string(),
            })),
        );
    }

    /// Defined value of a role, if any
    pub fn get(&self, role: &str) -> Option<&ColorValue> {
        self.0.get(role).and_then(|v| v.as_ref()).filter(|v| v.is_defined())
    }

    /// Iterate over roles that carry a defined color
    pub fn defined_roles(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.0
            .iter()
            .filter_map(|(role, value)| value.as_ref().filter(|v| v.is_defined()).map(|v| (role.as_str(), v)))
    }

    /// Resolve a color reference: a role name maps to its themed value,
    /// anything else is returned unchanged.
    pub fn resolve<'a>(&'a self, reference: &'a str, theme: Theme) -> &'a str {
        match self.get(reference) {
            Some(value) => value.for_theme(theme),
            None => reference,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

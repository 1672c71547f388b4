//! Foreground/background contrast check.
//!
//! Luminance here is the platform's simplified formula: the 0.2126/0.7152/0.0722
//! channel weights are applied to the raw 0-1 channel values, without the
//! sRGB gamma expansion the WCAG definition applies first. Ratios therefore
//! differ from a WCAG-conformant checker for mid-tone colors (black on white
//! is still 21:1). Reported ratios match the front-end's.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::policy::{CONTRAST_AAA, CONTRAST_AA_LARGE, CONTRAST_AA_NORMAL};

/// Why a color string could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid color '{input}': expected 3 or 6 hex digits, found {digits}")]
    InvalidLength { input: String, digits: usize },
    #[error("invalid color '{input}': '{found}' is not a hex digit")]
    InvalidDigit { input: String, found: char },
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
///
/// Shorthand is expanded by doubling each digit. Alpha forms and named
/// colors are rejected.
pub fn parse_hex_color(input: &str) -> Result<Rgb, ColorParseError> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(found) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit {
            input: input.to_string(),
            found,
        });
    }

    let nibbles: Vec<u8> = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb {
            r: r * 17,
            g: g * 17,
            b: b * 17,
        }),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb {
            r: r1 * 16 + r2,
            g: g1 * 16 + g2,
            b: b1 * 16 + b2,
        }),
        other => Err(ColorParseError::InvalidLength {
            input: input.to_string(),
            digits: other.len(),
        }),
    }
}

/// Simplified (non gamma-corrected) relative luminance in [0, 1]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in [1, 21]. Order does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Outcome of [`validate_contrast_ratio`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    /// AA for body text
    pub is_valid_normal: bool,
    /// AA for large text
    pub is_valid_large: bool,
    #[serde(rename = "isValidAAA")]
    pub is_valid_aaa: bool,
}

impl ContrastResult {
    fn from_ratio(ratio: f64) -> Self {
        ContrastResult {
            ratio,
            is_valid_normal: ratio >= CONTRAST_AA_NORMAL,
            is_valid_large: ratio >= CONTRAST_AA_LARGE,
            is_valid_aaa: ratio >= CONTRAST_AAA,
        }
    }
}

pub fn validate_contrast_ratio(foreground: &str, background: &str) -> Result<ContrastResult, ColorParseError> {
    let fg = parse_hex_color(foreground)?;
    let bg = parse_hex_color(background)?;
    let result = ContrastResult::from_ratio(contrast_ratio(fg, bg));

    debug!(
        "contrast {} on {}: {:.2}:1 (normal={}, large={}, aaa={})",
        foreground, background, result.ratio, result.is_valid_normal, result.is_valid_large, result.is_valid_aaa
    );

    Ok(result)
}

//! Design-system compliance validators.
//!
//! Every validator is a pure function from its input to a fresh result
//! struct. None of them panic or fail on out-of-policy input; a policy
//! violation is reported as `is_valid: false` with the numbers that caused
//! it. The only fallible entry point is [`validate_contrast_ratio`], which
//! has to parse color strings.

pub mod aggregate;
pub mod cards;
pub mod contrast;
pub mod layout;
pub mod navigation;
pub mod palette;

pub use aggregate::{validate_design_system, DesignSystemReport, DesignSystemResults, DesignSystemSummary};
pub use cards::{validate_card_consistency, CardConsistencyResult, CardDescriptor, CardInconsistency, Dimension};
pub use contrast::{parse_hex_color, validate_contrast_ratio, ColorParseError, ContrastResult, Rgb};
pub use layout::{
    expected_cards_per_row, validate_content_sections, validate_contest_grid, validate_hero_height,
    validate_responsive_layout, ContentSectionsResult, ContestGridResult, HeroHeightResult, ViewportLayout,
};
pub use navigation::{validate_navigation_routes, NavigationResult};
pub use palette::{validate_color_palette, ColorPaletteResult};

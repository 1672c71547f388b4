//! Design-system policy constants.
//!
//! Fixed thresholds the front-end must conform to. Everything in here is
//! read-only and compiled in; there is no runtime override.

/// Maximum number of primary (non-neutral) palette roles
pub const MAX_PRIMARY_COLORS: usize = 3;

/// Palette role that does not count towards the primary color budget
pub const NEUTRAL_ROLE: &str = "NEUTRAL";

/// Minimum navigation routes shown to visitors
pub const MIN_ROUTES_LOGGED_OUT: usize = 3;

/// Minimum navigation routes shown to signed-in users
pub const MIN_ROUTES_LOGGED_IN: usize = 5;

/// Hero section height bounds, in percent of the viewport height (inclusive)
pub const HERO_MIN_HEIGHT_PERCENT: f64 = 60.0;
pub const HERO_MAX_HEIGHT_PERCENT: f64 = 70.0;

/// Minimum number of meaningful content sections on the landing page
pub const MIN_CONTENT_SECTIONS: usize = 10;

/// Contrast thresholds
pub const CONTRAST_AA_NORMAL: f64 = 4.5;
pub const CONTRAST_AA_LARGE: f64 = 3.0;
pub const CONTRAST_AAA: f64 = 7.0;

/// One tier of the contest card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTier {
    pub name: &'static str,
    /// Smallest viewport width (px) this tier applies to
    pub min_viewport_width: u32,
    pub cards_per_row: u32,
}

/// Contest card grid, widest tier first.
pub const CONTEST_GRID: [GridTier; 4] = [
    GridTier { name: "desktop", min_viewport_width: 1024, cards_per_row: 4 },
    GridTier { name: "tablet", min_viewport_width: 768, cards_per_row: 3 },
    GridTier { name: "mobile", min_viewport_width: 480, cards_per_row: 2 },
    GridTier { name: "small", min_viewport_width: 0, cards_per_row: 1 },
];

/// Look up the grid tier for a viewport width
pub fn grid_tier_for(viewport_width: u32) -> &'static GridTier {
    CONTEST_GRID
        .iter()
        .find(|tier| viewport_width >= tier.min_viewport_width)
        .unwrap_or(&CONTEST_GRID[CONTEST_GRID.len() - 1])
}

/// Navbar routes for visitors
pub const PUBLIC_ROUTES: [&str; 3] = ["Home", "All Contests", "Leaderboard"];

/// Navbar routes for signed-in users
pub const MEMBER_ROUTES: [&str; 5] = ["Home", "All Contests", "Leaderboard", "Dashboard", "Profile"];

/// Contest card dimensions
pub const CARD_MIN_HEIGHT: &str = "320px";
pub const CARD_BORDER_RADIUS: &str = "0.5rem";

//! Navigation route count check.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::policy::{MIN_ROUTES_LOGGED_IN, MIN_ROUTES_LOGGED_OUT};

/// Outcome of [`validate_navigation_routes`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResult {
    pub is_valid: bool,
    pub count: usize,
    pub min_required: usize,
    pub is_authenticated: bool,
}

/// Minimum route count for an authentication state
pub fn min_routes(is_authenticated: bool) -> usize {
    if is_authenticated {
        MIN_ROUTES_LOGGED_IN
    } else {
        MIN_ROUTES_LOGGED_OUT
    }
}

/// Check that the navbar exposes enough routes. Only the number of routes matters.
pub fn validate_navigation_routes<T>(routes: &[T], is_authenticated: bool) -> NavigationResult {
    let min_required = min_routes(is_authenticated);
    let count = routes.len();

    debug!(
        "navigation: {} routes (authenticated={}, need {})",
        count, is_authenticated, min_required
    );

    NavigationResult {
        is_valid: count >= min_required,
        count,
        min_required,
        is_authenticated,
    }
}

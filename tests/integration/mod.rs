//! Integration tests for design-preflight.
//!
//! These tests run the audit against the JSON configs in `tests/fixtures/`.

pub mod cli_tests;
pub mod full_run_tests;
pub mod output_tests;

use design_preflight::config::{load_config, DesignConfig};

/// Absolute path of a fixture file
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Load a fixture as a design config
pub fn fixture(name: &str) -> DesignConfig {
    load_config(&fixture_path(name)).unwrap()
}

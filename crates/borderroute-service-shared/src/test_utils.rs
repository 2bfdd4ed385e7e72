//! Test utilities for microservice handler testing.
//!
//! This module provides fixtures and helpers for testing HTTP handlers
//! with a pre-loaded border graph.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the test fixture dataset.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/countries.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState loaded from the fixture dataset.
///
/// The state is cached after the first load.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded. This indicates a test
/// configuration issue.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_PATH);
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

/// Get the absolute path to the test fixture dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Known country codes in the test fixture.
pub mod fixture_countries {
    /// Czech Republic, landlocked in central Europe.
    pub const CZE: &str = "CZE";

    /// Austria, borders CZE.
    pub const AUT: &str = "AUT";

    /// Italy, two crossings from CZE via AUT.
    pub const ITA: &str = "ITA";

    /// Iceland, no land borders.
    pub const ISL: &str = "ISL";

    /// Australia, no land borders.
    pub const AUS: &str = "AUS";
}

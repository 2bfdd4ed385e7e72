//! Shared fixtures for the library integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use borderroute_lib::{BorderGraph, Country};

/// Path to the checked-in country dataset fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/countries.json")
}

/// Small central European border set plus an island with no land borders.
///
/// CZE-AUT, AUT-ITA, AUT-HUN, HUN-ROU, HUN-SVN, ITA-SVN, ISL.
pub fn central_europe() -> BorderGraph {
    BorderGraph::from_countries([
        Country::new("CZE", ["AUT"]),
        Country::new("AUT", ["CZE", "ITA", "HUN"]),
        Country::new("ITA", ["AUT", "SVN"]),
        Country::new("HUN", ["AUT", "ROU", "SVN"]),
        Country::new("ROU", ["HUN"]),
        Country::new("SVN", ["ITA", "HUN"]),
        Country::new("ISL", Vec::<String>::new()),
    ])
    .expect("fixture graph builds")
}

/// Route codes as plain strings for terse assertions.
pub fn codes(route: &borderroute_lib::Route) -> Vec<&str> {
    route.codes().iter().map(|code| code.as_str()).collect()
}

//! borderroute library entry points.
//!
//! This crate exposes helpers to load a country border dataset into memory,
//! hold it as an immutable border graph, and answer shortest land route
//! queries over it. Higher-level consumers (CLI, HTTP service) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod country;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod path;

pub use country::{Country, CountryCode};
pub use dataset::{
    load_border_graph, load_border_graph_from_reader, parse_countries, resolve_dataset_path,
    CountryRecord, DATA_PATH_ENV, DEFAULT_DATA_PATH,
};
pub use error::{Error, Result};
pub use graph::BorderGraph;
pub use path::{find_route, find_route_with, Route, SearchLimits};

//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the loaded border graph.

use std::path::Path;
use std::sync::Arc;

use borderroute_lib::{
    find_route_with, load_border_graph, BorderGraph, Error as LibError, Route, SearchLimits,
};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to locate, read or validate the border dataset.
    DatasetLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetLoad(e) => write!(f, "failed to load border dataset: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetLoad(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::DatasetLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. The border graph inside is never
/// mutated after construction.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use borderroute_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let graph = state.graph();
///     // ... use graph
/// }
///
/// let state = AppState::load("path/to/countries.json").unwrap();
/// let app = Router::new()
///     .route("/routing/{origin}/{destination}", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: BorderGraph,
    limits: SearchLimits,
}

impl AppState {
    /// Load application state from a country dataset file.
    ///
    /// # Arguments
    ///
    /// * `data_path` - Path to the JSON country dataset
    ///
    /// # Returns
    ///
    /// Returns an `AppState` on success, or an `AppStateError` if loading fails.
    pub fn load(data_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let data_path = data_path.as_ref();

        tracing::info!(path = %data_path.display(), "loading border dataset");
        let graph = load_border_graph(data_path)?;
        tracing::info!(
            country_count = graph.len(),
            border_count = graph.border_count(),
            "border graph loaded successfully"
        );

        Ok(Self::from_graph(graph))
    }

    /// Create application state from a pre-built graph.
    ///
    /// This is useful for testing or when loading from bundled bytes.
    pub fn from_graph(graph: BorderGraph) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                graph,
                limits: SearchLimits::unlimited(),
            }),
        }
    }

    /// Replace the search budget applied to every route query.
    pub fn with_limits(self, limits: SearchLimits) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                graph: self.inner.graph.clone(),
                limits,
            }),
        }
    }

    /// Access the loaded border graph.
    pub fn graph(&self) -> &BorderGraph {
        &self.inner.graph
    }

    /// Search budget applied to route queries.
    pub fn limits(&self) -> SearchLimits {
        self.inner.limits
    }

    /// Run a route query against the shared graph with the configured budget.
    pub fn find_route(&self, origin: &str, destination: &str) -> Result<Route, LibError> {
        find_route_with(&self.inner.graph, origin, destination, &self.inner.limits)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("country_count", &self.inner.graph.len())
            .field("max_visited", &self.inner.limits.max_visited)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borderroute_lib::Country;

    fn minimal_graph() -> BorderGraph {
        BorderGraph::from_countries([
            Country::new("CZE", ["AUT"]),
            Country::new("AUT", ["CZE"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_app_state_from_graph() {
        let state = AppState::from_graph(minimal_graph());

        assert_eq!(state.graph().len(), 2);
        assert_eq!(state.limits(), SearchLimits::unlimited());
    }

    #[test]
    fn test_app_state_clone() {
        let state1 = AppState::from_graph(minimal_graph());
        let state2 = state1.clone();

        assert_eq!(state1.graph().len(), state2.graph().len());
    }

    #[test]
    fn test_app_state_with_limits() {
        let state =
            AppState::from_graph(minimal_graph()).with_limits(SearchLimits::max_visited(5));
        assert_eq!(state.limits().max_visited, Some(5));
        assert_eq!(state.graph().len(), 2);
    }

    #[test]
    fn test_app_state_find_route() {
        let state = AppState::from_graph(minimal_graph());
        let route = state.find_route("cze", "aut").unwrap();
        assert_eq!(route.to_string(), "CZE -> AUT");
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::from_graph(minimal_graph());
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("country_count"));
    }

    #[test]
    fn test_app_state_load_nonexistent() {
        let result = AppState::load("/nonexistent/path/to/countries.json");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/to/countries.json"));
        match err {
            AppStateError::DatasetLoad(LibError::DatasetNotFound { path }) => {
                assert!(path.ends_with("countries.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

//! Land border routing HTTP microservice.
//!
//! Exposes the shortest land route between two countries over HTTP.
//!
//! # Endpoints
//!
//! - `GET /routing/{origin}/{destination}` - Shortest land route between two countries
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

#![deny(warnings)]

use std::env;
use std::path::PathBuf;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use borderroute_lib::{resolve_dataset_path, SearchLimits};
use borderroute_service_shared::{
    failure_reason, from_lib_error, health_live, health_ready, metrics_handler,
    record_route_failed, record_route_found, record_route_hops, AppState, MetricsConfig,
    MetricsLayer, ProblemDetails, RequestId, RouteRequest, Validate,
};

/// Service label attached to business metrics.
pub const SERVICE_NAME: &str = "route";

/// Runtime configuration read from the environment at startup.
///
/// - `BORDERROUTE_DATA_PATH` - Path to the countries JSON dataset
/// - `SERVICE_PORT` - HTTP port (default: 8080)
/// - `ROUTE_MAX_VISITED` - Optional cap on countries visited per search
/// - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus exporter settings
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub data_path: PathBuf,
    pub port: u16,
    pub limits: SearchLimits,
    pub metrics: MetricsConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(8080);

        Self {
            data_path: resolve_dataset_path(None),
            port,
            limits: parse_limits(env::var("ROUTE_MAX_VISITED").ok().as_deref()),
            metrics: MetricsConfig::from_env(),
        }
    }
}

fn parse_limits(raw: Option<&str>) -> SearchLimits {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return SearchLimits::unlimited();
    };

    match raw.parse::<usize>() {
        Ok(limit) if limit > 0 => SearchLimits::max_visited(limit),
        _ => {
            warn!(value = raw, "ignoring invalid ROUTE_MAX_VISITED");
            SearchLimits::unlimited()
        }
    }
}

/// Successful route response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteResponse {
    /// Ordered country codes from origin to destination inclusive.
    pub route: Vec<String>,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug)]
enum Response {
    Success(RouteResponse),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router with the metrics endpoint at `/metrics`.
pub fn router(state: AppState) -> Router {
    router_with_metrics_path(state, "/metrics")
}

/// Build the service router, mounting the metrics endpoint at `metrics_path`.
pub fn router_with_metrics_path(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route("/routing/{origin}/{destination}", get(route_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(MetricsLayer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle GET /routing/{origin}/{destination} requests.
async fn route_handler(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
    request_id: RequestId,
) -> Response {
    let request = RouteRequest::new(origin, destination);

    info!(
        request_id = %request_id,
        origin = %request.origin,
        destination = %request.destination,
        "handling route request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_route_failed("validation_error", SERVICE_NAME);
        return Response::Error(*problem);
    }

    let route = match state.find_route(&request.origin, &request.destination) {
        Ok(route) => route,
        Err(e) => {
            let reason = failure_reason(&e);
            if e.is_client_error() {
                info!(request_id = %request_id, reason, error = %e, "route not available");
            } else {
                warn!(request_id = %request_id, reason, error = %e, "route search failed");
            }
            record_route_failed(reason, SERVICE_NAME);
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
    };

    let hops = route.hop_count();
    record_route_found(SERVICE_NAME);
    record_route_hops(hops);

    info!(request_id = %request_id, hops, route = %route, "route computed successfully");

    Response::Success(RouteResponse {
        route: route.into_codes().into_iter().map(String::from).collect(),
    })
}

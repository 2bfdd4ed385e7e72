//! Land border routing HTTP microservice.
//!
//! # Configuration
//!
//! - `BORDERROUTE_DATA_PATH` - Path to the countries JSON dataset (default: `data/countries.json`)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `ROUTE_MAX_VISITED` - Optional search budget per request
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus exporter settings

use std::net::SocketAddr;

use tracing::{error, info};

use borderroute_service_route::{router_with_metrics_path, ServiceConfig, SERVICE_NAME};
use borderroute_service_shared::{init_logging, init_metrics, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_default_service(SERVICE_NAME);
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();

    if let Err(e) = init_metrics(&config.metrics) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    info!(
        service = logging_config.service_name(),
        data_path = %config.data_path.display(),
        port = config.port,
        max_visited = ?config.limits.max_visited,
        "starting route service"
    );

    let state = AppState::load(&config.data_path)
        .map_err(|e| {
            error!(error = %e, path = %config.data_path.display(), "failed to load application state");
            e
        })?
        .with_limits(config.limits);

    info!(
        countries = state.graph().len(),
        borders = state.graph().border_count(),
        "application state loaded"
    );

    let app = router_with_metrics_path(state, &config.metrics.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

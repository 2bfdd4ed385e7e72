//! Route command handler for computing land routes between countries.

use anyhow::Result;

use borderroute_lib::{find_route, BorderGraph};

use crate::output::{render_route, OutputFormat};

/// Find the shortest land route and render it in the requested format.
///
/// Codes are passed through unchanged; the library normalizes them.
pub fn handle_route(
    graph: &BorderGraph,
    origin: &str,
    destination: &str,
    format: OutputFormat,
) -> Result<String> {
    let route = find_route(graph, origin, destination)?;
    tracing::info!(hops = route.hop_count(), "route found");
    Ok(render_route(&route, format)?)
}

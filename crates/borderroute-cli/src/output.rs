//! Output formatting for route and country rendering.

use clap::ValueEnum;
use serde::Serialize;

use borderroute_lib::{Country, Route};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON matching the HTTP service body.
    Json,
}

#[derive(Serialize)]
struct RouteBody<'a> {
    route: &'a Route,
}

/// Render a route.
///
/// Text output is the arrow-joined codes followed by the number of border
/// crossings. JSON output is `{"route":[...]}`.
pub fn render_route(route: &Route, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\nBorder crossings: {}",
            route,
            route.hop_count()
        )),
        OutputFormat::Json => serde_json::to_string(&RouteBody { route }),
    }
}

/// Render a country and its land borders.
pub fn render_country(country: &Country, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let borders = if country.is_isolated() {
                "(none)".to_string()
            } else {
                country
                    .borders
                    .iter()
                    .map(|b| b.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            Ok(format!("{}\nBorders: {}", country.code, borders))
        }
        OutputFormat::Json => serde_json::to_string(country),
    }
}

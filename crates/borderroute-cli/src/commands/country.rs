//! Country command handler.

use anyhow::Result;

use borderroute_lib::{BorderGraph, CountryCode};

use crate::output::{render_country, OutputFormat};

/// Look up a single country and render its land borders.
pub fn handle_country(graph: &BorderGraph, code: &str, format: OutputFormat) -> Result<String> {
    let country = graph.lookup_country(&CountryCode::new(code))?;
    Ok(render_country(&country, format)?)
}

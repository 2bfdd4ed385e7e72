//! Handlers for the CLI subcommands.

pub mod country;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use borderroute_lib::{load_border_graph, resolve_dataset_path, BorderGraph};

/// Resolve the dataset path from `--data`, the environment or the default,
/// then load the border graph.
pub fn load_graph(data: Option<&Path>) -> Result<BorderGraph> {
    let path = resolve_dataset_path(data);
    tracing::debug!(path = %path.display(), "resolved dataset path");
    load_border_graph(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))
}

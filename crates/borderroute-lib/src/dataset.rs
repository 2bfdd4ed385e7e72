use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::country::{Country, CountryCode};
use crate::error::{Error, Result};
use crate::graph::BorderGraph;

/// Environment variable that overrides the dataset location.
pub const DATA_PATH_ENV: &str = "BORDERROUTE_DATA_PATH";

/// Dataset location used when neither an explicit path nor
/// [`DATA_PATH_ENV`] is provided.
pub const DEFAULT_DATA_PATH: &str = "data/countries.json";

/// One element of the country dataset.
///
/// The file follows the restcountries.com layout: an array of objects with a
/// `cca3` code and an optional `borders` list. Every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
}

/// Resolve the dataset path.
///
/// Resolution order:
/// 1. `explicit` argument (typically a CLI flag)
/// 2. `BORDERROUTE_DATA_PATH` environment variable
/// 3. [`DEFAULT_DATA_PATH`]
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    resolve_with_env(explicit, std::env::var(DATA_PATH_ENV).ok())
}

fn resolve_with_env(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Load the country dataset at `path` into an immutable border graph.
pub fn load_border_graph(path: &Path) -> Result<BorderGraph> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading border dataset");
    let file = File::open(path)?;
    let graph = load_border_graph_from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        countries = graph.len(),
        borders = graph.border_count(),
        "border dataset loaded"
    );
    Ok(graph)
}

/// Load a border graph from any JSON source, e.g. an embedded byte slice.
pub fn load_border_graph_from_reader<R: Read>(reader: R) -> Result<BorderGraph> {
    let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
    BorderGraph::from_countries(records_to_countries(records)?)
}

/// Parse dataset JSON into countries without building a graph.
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    records_to_countries(records)
}

fn records_to_countries(records: Vec<CountryRecord>) -> Result<Vec<Country>> {
    let mut countries = Vec::with_capacity(records.len());
    let mut skipped_records = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let Some(raw_code) = record.cca3 else {
            skipped_records += 1;
            continue;
        };
        let code = CountryCode::new(&raw_code);
        if code.is_empty() {
            return Err(Error::InvalidDataset {
                message: format!("record {index} has an empty cca3 code"),
            });
        }
        countries.push(Country::new(code, record.borders.unwrap_or_default()));
    }

    if skipped_records > 0 {
        debug!(skipped_records, "ignored dataset records without a cca3 code");
    }

    Ok(countries)
}

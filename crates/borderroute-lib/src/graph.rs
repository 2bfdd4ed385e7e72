use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::country::{Country, CountryCode};
use crate::error::{Error, Result};

/// Immutable land border graph used by the route finder.
///
/// The adjacency map is built once by [`BorderGraph::from_countries`] and is
/// shared behind an `Arc`, so clones are cheap and every clone sees the same
/// data. There is no mutation API; concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct BorderGraph {
    adjacency: Arc<HashMap<CountryCode, Vec<CountryCode>>>,
}

impl BorderGraph {
    /// Build the border graph from a list of countries.
    ///
    /// Every border is inserted in both directions so the relation is
    /// undirected even when the source lists a border on one side only.
    /// Borders that reference a code missing from `countries` are dropped.
    /// A code listed twice is rejected with [`Error::DuplicateCountry`].
    pub fn from_countries<I>(countries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Country>,
    {
        let countries: Vec<Country> = countries.into_iter().collect();

        let mut adjacency: HashMap<CountryCode, Vec<CountryCode>> =
            HashMap::with_capacity(countries.len());
        for country in &countries {
            if adjacency.insert(country.code.clone(), Vec::new()).is_some() {
                return Err(Error::DuplicateCountry {
                    code: country.code.to_string(),
                });
            }
        }

        let mut skipped_borders = 0usize;
        for country in countries {
            for border in country.borders {
                if border == country.code {
                    continue;
                }
                if !adjacency.contains_key(&border) {
                    skipped_borders += 1;
                    continue;
                }
                adjacency
                    .entry(border.clone())
                    .or_default()
                    .push(country.code.clone());
                adjacency.entry(country.code.clone()).or_default().push(border);
            }
        }

        for neighbours in adjacency.values_mut() {
            neighbours.sort_unstable();
            neighbours.dedup();
        }

        if skipped_borders > 0 {
            warn!(
                skipped_borders,
                "ignored borders referencing unknown countries",
            );
        }

        let graph = Self {
            adjacency: Arc::new(adjacency),
        };
        debug!(
            countries = graph.len(),
            borders = graph.border_count(),
            "border graph built"
        );
        Ok(graph)
    }

    /// Resolve a country and its direct neighbours.
    ///
    /// Fails with [`Error::CountryNotFound`] when the code is unknown.
    pub fn lookup_country(&self, code: &CountryCode) -> Result<Country> {
        self.adjacency
            .get(code)
            .map(|borders| Country {
                code: code.clone(),
                borders: borders.clone(),
            })
            .ok_or_else(|| Error::CountryNotFound {
                code: code.to_string(),
            })
    }

    /// Return the neighbours for a given country code in ascending order.
    ///
    /// Unknown codes yield an empty slice; the existence check belongs to the
    /// caller.
    pub fn neighbours(&self, code: &CountryCode) -> &[CountryCode] {
        self.adjacency
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Number of countries in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected borders.
    pub fn border_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// All known country codes in ascending order.
    pub fn codes(&self) -> Vec<&CountryCode> {
        let mut codes: Vec<&CountryCode> = self.adjacency.keys().collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::new(raw)
    }

    #[test]
    fn one_sided_border_becomes_undirected() {
        let graph = BorderGraph::from_countries([
            Country::new("CZE", ["AUT"]),
            Country::new("AUT", Vec::<String>::new()),
        ])
        .unwrap();

        assert_eq!(graph.neighbours(&code("AUT")), &[code("CZE")]);
        assert_eq!(graph.neighbours(&code("CZE")), &[code("AUT")]);
        assert_eq!(graph.border_count(), 1);
    }

    #[test]
    fn unknown_borders_are_dropped() {
        let graph = BorderGraph::from_countries([
            Country::new("CZE", ["AUT", "DEU"]),
            Country::new("AUT", ["CZE"]),
        ])
        .unwrap();

        assert_eq!(graph.neighbours(&code("CZE")), &[code("AUT")]);
        assert!(!graph.contains(&code("DEU")));
    }

    #[test]
    fn duplicate_country_is_rejected() {
        let error = BorderGraph::from_countries([
            Country::new("CZE", ["AUT"]),
            Country::new("cze", Vec::<String>::new()),
            Country::new("AUT", ["CZE"]),
        ])
        .unwrap_err();

        assert!(matches!(error, Error::DuplicateCountry { code } if code == "CZE"));
    }

    #[test]
    fn self_border_in_raw_country_is_ignored() {
        let raw = Country {
            code: code("AND"),
            borders: vec![code("AND")],
        };
        let graph = BorderGraph::from_countries([raw]).unwrap();
        assert!(graph.neighbours(&code("AND")).is_empty());
    }

    #[test]
    fn lookup_and_neighbours_disagree_on_unknown_codes() {
        let graph =
            BorderGraph::from_countries([Country::new("ISL", Vec::<String>::new())]).unwrap();

        assert!(graph.neighbours(&code("XXX")).is_empty());
        let error = graph.lookup_country(&code("XXX")).unwrap_err();
        assert!(matches!(error, Error::CountryNotFound { code } if code == "XXX"));

        let iceland = graph.lookup_country(&code("ISL")).unwrap();
        assert!(iceland.is_isolated());
    }

    #[test]
    fn default_graph_is_empty() {
        let graph = BorderGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.codes().is_empty());
    }
}

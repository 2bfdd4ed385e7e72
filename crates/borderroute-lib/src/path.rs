use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::Serialize;

use crate::country::CountryCode;
use crate::error::{Error, Result};
use crate::graph::BorderGraph;

/// Budget applied during the search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of countries the search may discover (the origin
    /// included) before giving up. `None` means unlimited.
    pub max_visited: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn max_visited(limit: usize) -> Self {
        Self {
            max_visited: Some(limit),
        }
    }
}

/// Ordered list of countries from origin to destination.
///
/// Consecutive entries share a land border. A route always holds at least
/// one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<CountryCode>);

impl Route {
    pub fn codes(&self) -> &[CountryCode] {
        &self.0
    }

    /// Number of border crossings, i.e. countries minus one.
    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&CountryCode> {
        self.0.first()
    }

    pub fn destination(&self) -> Option<&CountryCode> {
        self.0.last()
    }

    pub fn into_codes(self) -> Vec<CountryCode> {
        self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, code) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Find the shortest land route between `origin` and `destination` without a
/// search budget.
///
/// Inputs are normalized here (trimmed, uppercased), so callers may pass
/// codes in any casing.
pub fn find_route(graph: &BorderGraph, origin: &str, destination: &str) -> Result<Route> {
    find_route_with(graph, origin, destination, &SearchLimits::unlimited())
}

/// Run breadth-first search between two countries with an optional budget.
///
/// The origin is resolved before the destination and both must exist even
/// when the search never reaches them. Neighbours are expanded in ascending
/// code order, so among several shortest routes the lexicographically first
/// discovered one wins.
pub fn find_route_with(
    graph: &BorderGraph,
    origin: &str,
    destination: &str,
    limits: &SearchLimits,
) -> Result<Route> {
    let origin = graph.lookup_country(&CountryCode::new(origin))?.code;
    let destination = graph.lookup_country(&CountryCode::new(destination))?.code;

    if origin == destination {
        return Ok(Route(vec![origin]));
    }

    let mut parents: HashMap<&CountryCode, Option<&CountryCode>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(&origin, None);
    queue.push_back(&origin);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbours(current) {
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if *next == destination {
                return reconstruct_route(&parents, &origin, &destination);
            }
            if let Some(limit) = limits.max_visited {
                if parents.len() > limit {
                    return Err(Error::SearchLimitExceeded { limit });
                }
            }
            queue.push_back(next);
        }
    }

    Err(Error::RouteNotFound {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })
}

fn reconstruct_route(
    parents: &HashMap<&CountryCode, Option<&CountryCode>>,
    origin: &CountryCode,
    destination: &CountryCode,
) -> Result<Route> {
    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != origin {
        match parents.get(current).copied().flatten() {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => {
                return Err(Error::Internal {
                    message: format!(
                        "predecessor chain from '{destination}' does not reach '{origin}'"
                    ),
                })
            }
        }
    }
    path.reverse();
    Ok(Route(path))
}

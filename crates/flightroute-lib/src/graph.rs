//! In-memory flight graph: an arena of airport nodes addressed by dense
//! index, with a code-to-index map layered on top.
//!
//! Nodes are referenced by `usize` index rather than pointers so algorithm
//! state (distance, parent, visited) can live in flat arrays indexed
//! directly. The map is a derived lookup structure only; the airport vector
//! is the single source of truth.

use std::collections::HashMap;

/// Directed route edge, owned by its source airport.
///
/// Parallel edges between the same ordered pair of airports are retained
/// independently, one per dataset row (different airlines or flights).
#[derive(Debug, Clone)]
pub struct Route {
    /// Dense index of the destination airport.
    pub dest: usize,
    /// Airline code.
    pub airline: String,
    /// Airline numeric identifier, `-1` when absent.
    pub airline_id: i64,
    /// Number of intermediate stops, usually 0.
    pub stops: i64,
    /// Aircraft equipment codes.
    pub equipment: String,
    /// Whether the flight is a codeshare.
    pub codeshare: bool,
    /// Estimated travel time in hours. NaN means unknown; such an edge is
    /// never traversed by the search engines.
    pub hours: f64,
}

/// Airport node keyed by its short code.
#[derive(Debug, Clone)]
pub struct Airport {
    /// IATA/ICAO code, the natural key.
    pub code: String,
    /// External numeric identifier from the dataset. Set once by the first
    /// row carrying a non-negative id, never overwritten afterwards.
    pub external_id: Option<i64>,
    /// Outgoing adjacency list.
    pub routes: Vec<Route>,
}

/// The route graph: all airports plus the code-to-index map.
///
/// Mutated only during ingestion (single writer); read-only for all queries
/// afterwards, so it may be shared freely between query callers.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    airports: Vec<Airport>,
    code_to_index: HashMap<String, usize>,
}

impl FlightGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `code`, allocating the next sequential index and
    /// a fresh node on first sight. Idempotent for a given code.
    pub fn get_or_create_index(&mut self, code: &str) -> usize {
        if let Some(&index) = self.code_to_index.get(code) {
            return index;
        }
        let index = self.airports.len();
        self.airports.push(Airport {
            code: code.to_string(),
            external_id: None,
            routes: Vec::new(),
        });
        self.code_to_index.insert(code.to_string(), index);
        index
    }

    /// Pure lookup of the index for `code`. Codes are matched as stored;
    /// callers are responsible for case-normalizing before lookup.
    pub fn find_index(&self, code: &str) -> Option<usize> {
        self.code_to_index.get(code).copied()
    }

    /// Append an outgoing route to the source airport's adjacency list.
    pub fn add_route(&mut self, source: usize, route: Route) {
        self.airports[source].routes.push(route);
    }

    /// Record the external id for an airport the first time a non-negative
    /// id is seen. Later values never overwrite an existing one.
    pub fn backfill_external_id(&mut self, index: usize, id: i64) {
        if id >= 0 {
            let airport = &mut self.airports[index];
            if airport.external_id.is_none() {
                airport.external_id = Some(id);
            }
        }
    }

    /// Airport at `index`.
    pub fn airport(&self, index: usize) -> &Airport {
        &self.airports[index]
    }

    /// Number of airport nodes.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Total number of edges across all adjacency lists.
    pub fn route_count(&self) -> usize {
        self.airports.iter().map(|a| a.routes.len()).sum()
    }

    /// Outgoing routes of the airport at `index`.
    pub fn routes(&self, index: usize) -> &[Route] {
        self.airports
            .get(index)
            .map(|a| a.routes.as_slice())
            .unwrap_or(&[])
    }

    /// Minimum finite travel time among the source airport's direct edges to
    /// the destination, ignoring any multi-hop alternative. `None` when
    /// either code is unknown, no direct edge exists, or no direct edge has
    /// a finite weight. O(out-degree of the source).
    pub fn fastest_direct(&self, src_code: &str, dst_code: &str) -> Option<f64> {
        let source = self.find_index(src_code)?;
        let dest = self.find_index(dst_code)?;

        let mut best: Option<f64> = None;
        for route in self.routes(source) {
            if route.dest != dest || !route.hours.is_finite() {
                continue;
            }
            best = Some(match best {
                Some(current) => current.min(route.hours),
                None => route.hours,
            });
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_to(dest: usize, hours: f64) -> Route {
        Route {
            dest,
            airline: "AA".to_string(),
            airline_id: 24,
            stops: 0,
            equipment: "738".to_string(),
            codeshare: false,
            hours,
        }
    }

    #[test]
    fn get_or_create_assigns_sequential_indices_once() {
        let mut graph = FlightGraph::new();
        assert_eq!(graph.get_or_create_index("JFK"), 0);
        assert_eq!(graph.get_or_create_index("LAX"), 1);
        assert_eq!(graph.get_or_create_index("JFK"), 0);
        assert_eq!(graph.airport_count(), 2);
    }

    #[test]
    fn find_index_does_not_mutate() {
        let graph = FlightGraph::new();
        assert_eq!(graph.find_index("JFK"), None);
        assert_eq!(graph.airport_count(), 0);
    }

    #[test]
    fn external_id_first_writer_wins() {
        let mut graph = FlightGraph::new();
        let jfk = graph.get_or_create_index("JFK");

        graph.backfill_external_id(jfk, -1);
        assert_eq!(graph.airport(jfk).external_id, None);

        graph.backfill_external_id(jfk, 3797);
        graph.backfill_external_id(jfk, 9999);
        assert_eq!(graph.airport(jfk).external_id, Some(3797));
    }

    #[test]
    fn parallel_routes_are_retained_independently() {
        let mut graph = FlightGraph::new();
        let jfk = graph.get_or_create_index("JFK");
        let lax = graph.get_or_create_index("LAX");

        graph.add_route(jfk, route_to(lax, 5.5));
        graph.add_route(jfk, route_to(lax, 6.0));
        assert_eq!(graph.routes(jfk).len(), 2);
        assert_eq!(graph.route_count(), 2);
    }

    #[test]
    fn fastest_direct_picks_minimum_finite_parallel_edge() {
        let mut graph = FlightGraph::new();
        let jfk = graph.get_or_create_index("JFK");
        let lax = graph.get_or_create_index("LAX");

        graph.add_route(jfk, route_to(lax, 6.0));
        graph.add_route(jfk, route_to(lax, f64::NAN));
        graph.add_route(jfk, route_to(lax, 5.5));

        assert_eq!(graph.fastest_direct("JFK", "LAX"), Some(5.5));
    }

    #[test]
    fn fastest_direct_ignores_unknown_codes_and_all_nan_edges() {
        let mut graph = FlightGraph::new();
        let jfk = graph.get_or_create_index("JFK");
        let lax = graph.get_or_create_index("LAX");
        graph.add_route(jfk, route_to(lax, f64::NAN));

        assert_eq!(graph.fastest_direct("JFK", "LAX"), None);
        assert_eq!(graph.fastest_direct("ZZZ", "LAX"), None);
        assert_eq!(graph.fastest_direct("JFK", "ZZZ"), None);
        assert_eq!(graph.fastest_direct("LAX", "JFK"), None);
    }

    #[test]
    fn fastest_direct_skips_infinite_weights() {
        let mut graph = FlightGraph::new();
        let jfk = graph.get_or_create_index("JFK");
        let lax = graph.get_or_create_index("LAX");
        graph.add_route(jfk, route_to(lax, f64::INFINITY));

        assert_eq!(graph.fastest_direct("JFK", "LAX"), None);

        graph.add_route(jfk, route_to(lax, 5.5));
        assert_eq!(graph.fastest_direct("JFK", "LAX"), Some(5.5));
    }
}

//! Route planning over a loaded [`FlightGraph`].
//!
//! This module provides:
//! - [`PathAlgorithm`] - the supported shortest-path algorithms
//! - [`RouteRequest`] - a high-level route planning request
//! - [`RoutePlan`] - the planned route result
//! - [`plan_route`] - the main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Dijkstra and Bellman-Ford are interchangeable strategies behind the
//! [`PathEngine`] trait rather than two parallel code paths; they must agree
//! on the total weight for any reachable pair, and keeping them behind one
//! interface makes that property straightforward to assert in tests.

mod engine;

pub use engine::{select_engine, BellmanFordEngine, DijkstraEngine, PathEngine};

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PathAlgorithm {
    /// Priority-queue relaxation.
    #[default]
    Dijkstra,
    /// Bounded full-relaxation passes.
    BellmanFord,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::BellmanFord => "bellman-ford",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
///
/// Codes are looked up as stored in the graph; callers normalize case before
/// building a request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub algorithm: PathAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor using the default algorithm.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            algorithm: PathAlgorithm::default(),
        }
    }

    /// Select a specific algorithm for this request.
    pub fn with_algorithm(mut self, algorithm: PathAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: PathAlgorithm,
    pub from: String,
    pub to: String,
    /// Total estimated travel time in hours.
    pub total_hours: f64,
    /// Airport codes from source to destination inclusive.
    pub codes: Vec<String>,
}

impl RoutePlan {
    /// Number of flight legs in the route.
    pub fn stops(&self) -> usize {
        self.codes.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Resolves both codes (failing with [`Error::UnknownAirport`] naming the
/// offending code), runs the selected engine, and maps the index path back
/// to airport codes. An unreachable destination is [`Error::RouteNotFound`].
pub fn plan_route(graph: &FlightGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let source = graph
        .find_index(&request.from)
        .ok_or_else(|| Error::UnknownAirport {
            code: request.from.clone(),
        })?;
    let goal = graph
        .find_index(&request.to)
        .ok_or_else(|| Error::UnknownAirport {
            code: request.to.clone(),
        })?;

    let engine = select_engine(request.algorithm);
    let found = engine
        .find_path(graph, source, goal)
        .ok_or_else(|| Error::RouteNotFound {
            from: request.from.clone(),
            to: request.to.clone(),
        })?;

    let codes = found
        .nodes
        .iter()
        .map(|&index| graph.airport(index).code.clone())
        .collect();

    Ok(RoutePlan {
        algorithm: request.algorithm,
        from: request.from.clone(),
        to: request.to.clone(),
        total_hours: found.total_hours,
        codes,
    })
}

/// Low-level query surface: total hours and ordered codes, or `None` when no
/// route exists. Unknown codes and unreachable destinations both map to
/// `None`; callers wanting to tell them apart use [`plan_route`].
pub fn shortest_path(
    graph: &FlightGraph,
    algorithm: PathAlgorithm,
    src_code: &str,
    dst_code: &str,
) -> Option<(f64, Vec<String>)> {
    let source = graph.find_index(src_code)?;
    let goal = graph.find_index(dst_code)?;

    let found = select_engine(algorithm).find_path(graph, source, goal)?;
    let codes = found
        .nodes
        .iter()
        .map(|&index| graph.airport(index).code.clone())
        .collect();
    Some((found.total_hours, codes))
}

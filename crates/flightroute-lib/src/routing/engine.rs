//! Shortest-path engine strategies.
//!
//! Each engine wraps one of the index-level searches in `path` behind the
//! [`PathEngine`] trait, so new algorithms can be added without touching the
//! `plan_route` orchestrator.

use crate::graph::FlightGraph;
use crate::path::{bellman_ford_indices, dijkstra_indices, PathResult};

use super::PathAlgorithm;

/// Trait for shortest-path strategies.
pub trait PathEngine: Send + Sync {
    /// The algorithm identifier for this engine.
    fn algorithm(&self) -> PathAlgorithm;

    /// Execute the search between two dense airport indices.
    ///
    /// Returns `Some(result)` when the goal is reachable, `None` otherwise.
    fn find_path(&self, graph: &FlightGraph, source: usize, goal: usize) -> Option<PathResult>;
}

/// Priority-queue relaxation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &FlightGraph, source: usize, goal: usize) -> Option<PathResult> {
        dijkstra_indices(graph, source, goal)
    }
}

/// Bounded full-relaxation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordEngine;

impl PathEngine for BellmanFordEngine {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::BellmanFord
    }

    fn find_path(&self, graph: &FlightGraph, source: usize, goal: usize) -> Option<PathResult> {
        bellman_ford_indices(graph, source, goal)
    }
}

/// Select the engine for a given algorithm.
pub fn select_engine(algorithm: PathAlgorithm) -> Box<dyn PathEngine> {
    match algorithm {
        PathAlgorithm::Dijkstra => Box::new(DijkstraEngine),
        PathAlgorithm::BellmanFord => Box::new(BellmanFordEngine),
    }
}

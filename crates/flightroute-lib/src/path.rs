//! Index-level shortest-path searches over a [`FlightGraph`].
//!
//! Both engines operate on flat arrays indexed by the graph's dense airport
//! indices and share the same edge admissibility rule: a route whose weight
//! is NaN or negative is never traversed. Because negative weights never
//! reach the relaxation loops, Dijkstra's non-negativity requirement holds
//! and Bellman-Ford's `n - 1` pass bound is sufficient without cycle
//! detection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{FlightGraph, Route};

/// Shortest path through the graph, expressed in dense indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Total estimated travel time in hours.
    pub total_hours: f64,
    /// Visited airports from source to goal inclusive.
    pub nodes: Vec<usize>,
}

/// Weight of a route if the search may traverse it.
fn traversable_hours(route: &Route) -> Option<f64> {
    if route.hours.is_nan() || route.hours < 0.0 {
        None
    } else {
        Some(route.hours)
    }
}

/// Dijkstra's algorithm from `source` to `goal`.
///
/// Maintains a min-heap of tentative distances with lazy deletion: a node
/// may be pushed several times and stale entries are discarded when popped
/// against the finalized marker. The search stops as soon as the goal is
/// finalized, which is safe because pop order guarantees its distance is
/// final. Returns `None` when the goal is unreachable.
pub fn dijkstra_indices(graph: &FlightGraph, source: usize, goal: usize) -> Option<PathResult> {
    let count = graph.airport_count();
    if source >= count || goal >= count {
        return None;
    }

    let mut distance = vec![f64::INFINITY; count];
    let mut parent: Vec<Option<usize>> = vec![None; count];
    let mut finalized = vec![false; count];
    let mut queue = BinaryHeap::new();

    distance[source] = 0.0;
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let node = entry.node;
        if finalized[node] {
            continue;
        }
        finalized[node] = true;

        if node == goal {
            break;
        }

        for route in graph.routes(node) {
            let Some(hours) = traversable_hours(route) else {
                continue;
            };
            let next = route.dest;
            let candidate = distance[node] + hours;
            if !finalized[next] && candidate < distance[next] {
                distance[next] = candidate;
                parent[next] = Some(node);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    finish(&distance, &parent, source, goal)
}

/// Bellman-Ford from `source` to `goal`.
///
/// Runs at most `airport_count - 1` full relaxation passes over every
/// airport's outgoing routes, stopping early once a pass makes no update.
/// Same result as Dijkstra on the same graph; kept as an independent engine
/// for cross-checking.
pub fn bellman_ford_indices(graph: &FlightGraph, source: usize, goal: usize) -> Option<PathResult> {
    let count = graph.airport_count();
    if source >= count || goal >= count {
        return None;
    }

    let mut distance = vec![f64::INFINITY; count];
    let mut parent: Vec<Option<usize>> = vec![None; count];
    distance[source] = 0.0;

    for _ in 1..count {
        let mut any_update = false;

        for node in 0..count {
            if distance[node].is_infinite() {
                continue;
            }
            for route in graph.routes(node) {
                let Some(hours) = traversable_hours(route) else {
                    continue;
                };
                let next = route.dest;
                let candidate = distance[node] + hours;
                if candidate < distance[next] {
                    distance[next] = candidate;
                    parent[next] = Some(node);
                    any_update = true;
                }
            }
        }

        if !any_update {
            break;
        }
    }

    finish(&distance, &parent, source, goal)
}

/// Turn the relaxation state into a result, or `None` when the goal's
/// distance stayed infinite.
fn finish(
    distance: &[f64],
    parent: &[Option<usize>],
    source: usize,
    goal: usize,
) -> Option<PathResult> {
    if distance[goal].is_infinite() {
        return None;
    }
    Some(PathResult {
        total_hours: distance[goal],
        nodes: reconstruct_path(parent, source, goal),
    })
}

/// Walk the parent chain backwards from `goal` and reverse it.
fn reconstruct_path(parent: &[Option<usize>], source: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == source {
            break;
        }
        current = parent[node];
    }
    path.reverse();
    path
}

/// Total ordering for f64 costs so they can live in a `BinaryHeap`.
#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Flight route planner library entry points.
//!
//! This crate ingests an OpenFlights-style routes dataset into an in-memory
//! weighted directed graph and answers least-estimated-time queries against
//! it. Higher-level consumers (CLI, map front ends) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod coerce;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod path;
pub mod record;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Airport, FlightGraph, Route};
pub use ingest::{ingest_routes, load_routes, load_routes_path, IngestReport};
pub use path::PathResult;
pub use routing::{
    plan_route, select_engine, shortest_path, PathAlgorithm, PathEngine, RoutePlan, RouteRequest,
};

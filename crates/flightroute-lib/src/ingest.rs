//! Ingestion of the routes dataset into a [`FlightGraph`].
//!
//! Rows are admitted permissively: the only required fields are the source
//! and destination airport codes. Everything else degrades to a default, so
//! a row with a missing airline id or an unparseable stop count still
//! produces an edge. A row is dropped (and counted) only when an endpoint
//! code is absent.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Serialize;

use crate::coerce::{parse_float_or, parse_int_or};
use crate::error::{Error, Result};
use crate::graph::{FlightGraph, Route};
use crate::record::{is_missing, split_fields};

/// Position of each consumed field within a dataset row.
const FIELD_AIRLINE: usize = 0;
const FIELD_AIRLINE_ID: usize = 1;
const FIELD_SRC_CODE: usize = 2;
const FIELD_SRC_ID: usize = 3;
const FIELD_DST_CODE: usize = 4;
const FIELD_DST_ID: usize = 5;
const FIELD_CODESHARE: usize = 6;
const FIELD_STOPS: usize = 7;
const FIELD_EQUIPMENT: usize = 8;
const FIELD_EST_TIME: usize = 9;

/// Counters retained for diagnostics after an ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Rows that produced an edge.
    pub admitted: usize,
    /// Rows dropped for a missing endpoint code.
    pub skipped: usize,
}

/// Field at `index`, or the empty string when the row is too short. Keeps
/// the fixed-position contract safe against truncated rows.
fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Ingest a routes dataset stream into `graph`.
///
/// The first line is discarded unconditionally as a header; an entirely
/// empty stream is an error. Re-running ingestion against an already
/// populated graph is defined as append-duplicating: existing airports are
/// reused by code and every admitted row appends a fresh parallel edge.
///
/// Fails with [`Error::NoRoutesAdmitted`] when no row survived admission;
/// callers must treat that as a fatal load error, not an empty graph.
pub fn ingest_routes<R: Read>(graph: &mut FlightGraph, reader: R) -> Result<IngestReport> {
    let mut lines = BufReader::new(reader).lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(Error::EmptyDataset),
    }

    let mut report = IngestReport::default();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let fields = split_fields(&line);

        let src_code = field(&fields, FIELD_SRC_CODE);
        let dst_code = field(&fields, FIELD_DST_CODE);

        // Admission rule: endpoint codes are the only required fields.
        if is_missing(src_code) || is_missing(dst_code) {
            report.skipped += 1;
            continue;
        }

        let airline_id = parse_int_or(field(&fields, FIELD_AIRLINE_ID), -1);
        let src_id = parse_int_or(field(&fields, FIELD_SRC_ID), -1);
        let dst_id = parse_int_or(field(&fields, FIELD_DST_ID), -1);
        let codeshare = field(&fields, FIELD_CODESHARE).eq_ignore_ascii_case("Y");
        let stops = parse_int_or(field(&fields, FIELD_STOPS), 0);
        let hours = parse_float_or(field(&fields, FIELD_EST_TIME), f64::NAN);

        let source = graph.get_or_create_index(src_code);
        let dest = graph.get_or_create_index(dst_code);

        graph.backfill_external_id(source, src_id);
        graph.backfill_external_id(dest, dst_id);

        graph.add_route(
            source,
            Route {
                dest,
                airline: field(&fields, FIELD_AIRLINE).to_string(),
                airline_id,
                stops,
                equipment: field(&fields, FIELD_EQUIPMENT).to_string(),
                codeshare,
                hours,
            },
        );
        report.admitted += 1;
    }

    if report.admitted == 0 {
        return Err(Error::NoRoutesAdmitted {
            skipped: report.skipped,
        });
    }

    tracing::debug!(
        admitted = report.admitted,
        skipped = report.skipped,
        airports = graph.airport_count(),
        "ingested routes dataset"
    );

    Ok(report)
}

/// Build a fresh graph from a routes dataset stream.
pub fn load_routes<R: Read>(reader: R) -> Result<FlightGraph> {
    let mut graph = FlightGraph::new();
    let report = ingest_routes(&mut graph, reader)?;
    tracing::info!(
        airports = graph.airport_count(),
        routes = report.admitted,
        skipped = report.skipped,
        "flight graph ready"
    );
    Ok(graph)
}

/// Build a fresh graph from a routes dataset file on disk.
pub fn load_routes_path(path: &Path) -> Result<FlightGraph> {
    let file = File::open(path)?;
    load_routes(file)
}

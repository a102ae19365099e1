//! Fallback-based coercion of raw dataset fields to typed values.

use crate::record::is_missing;

/// Parse a field as an integer, returning `fallback` when the field is
/// missing or unparseable. Never fails.
///
/// Parsing is whole-field: a partially numeric value such as `3.5` or
/// `7km` falls back rather than being prefix-parsed to `3` or `7`.
pub fn parse_int_or(field: &str, fallback: i64) -> i64 {
    if is_missing(field) {
        return fallback;
    }
    field.trim().parse().unwrap_or(fallback)
}

/// Parse a field as a float, returning `fallback` when the field is missing
/// or unparseable. The canonical fallback for an edge weight is `f64::NAN`,
/// which downstream search treats as "never traverse this edge".
///
/// Whole-field like [`parse_int_or`]: `5.5abc` falls back, not `5.5`.
pub fn parse_float_or(field: &str, fallback: f64) -> f64 {
    if is_missing(field) {
        return fallback;
    }
    field.trim().parse().unwrap_or(fallback)
}

//! Coercion of indexer scalars into display values.
//!
//! The subgraph serves every scalar as text (or null). Identifiers, blocks,
//! timestamps and counts become numeric-or-null; monetary amounts become
//! display-precision floats that default to zero. Neither helper fails.

use std::str::FromStr;

/// Parse an optional textual scalar, returning `None` when it is absent,
/// blank or not a valid `T`.
pub fn number_or_null<T: FromStr>(value: Option<&str>) -> Option<T> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse an optional textual decimal into a float, defaulting to `0.0`.
///
/// The result is approximate and only suitable for display; keep the raw
/// string (or the on-chain integer) for arithmetic.
#[must_use]
pub fn float_or_zero(value: Option<&str>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|parsed| !parsed.is_nan())
        .unwrap_or(0.0)
}

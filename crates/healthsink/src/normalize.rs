// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-entry validation and normalization.
//!
//! One raw reading plus its group context goes in; a fully-populated
//! [`Measurement`] or a [`Rejection`] comes out, never both and never
//! neither. A rejection is local to its entry: sibling entries and other
//! groups are unaffected.
//!
//! Timestamps leave this module as nanosecond-resolution epoch values so
//! downstream consumers work in a single numeric representation regardless
//! of the original string's format or offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use std::fmt;

/// A fully-normalized measurement. No optional fields remain: every default
/// has already been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Metric name, `"unknown"` when the group carried none.
    pub metric: String,
    /// Unit label, `"unknown"` when the group carried none.
    pub unit: String,
    /// Reporting device or app, `"unknown"` when the entry carried none.
    pub source: String,
    /// Timezone-normalized instant, nanoseconds since the Unix epoch.
    pub timestamp_ns: i64,
    /// The measured value.
    pub value: f64,
}

/// Why an entry was dropped. Counted and logged, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A required field is structurally absent (or the entry is not a
    /// mapping at all).
    MissingField(&'static str),
    /// `date` is present but not a recognizable date-time string.
    UnparsableTimestamp,
    /// `qty` is present but neither a number nor a numeric string.
    UnparsableNumber,
    /// The instant falls outside the representable nanosecond range.
    Other,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField(name) => write!(f, "missing required field: {}", name),
            Rejection::UnparsableTimestamp => write!(f, "unparsable timestamp"),
            Rejection::UnparsableNumber => write!(f, "unparsable numeric value"),
            Rejection::Other => write!(f, "timestamp outside representable range"),
        }
    }
}

/// Validate and normalize one raw entry.
///
/// `metric` and `unit` come from the enclosing group and default to
/// `"unknown"` when absent or empty, as do missing or empty `source`
/// fields. Offset-less date-time strings are interpreted as UTC; callers
/// that need a specific zone must send an explicit offset.
///
/// Pure and total: the same entry and group context always produce the
/// same result.
pub fn normalize_entry(
    entry: &Value,
    metric: Option<&str>,
    unit: Option<&str>,
) -> Result<Measurement, Rejection> {
    let fields = entry
        .as_object()
        .ok_or(Rejection::MissingField("date"))?;

    let date = fields
        .get("date")
        .ok_or(Rejection::MissingField("date"))?;
    let date = date.as_str().ok_or(Rejection::UnparsableTimestamp)?;
    let instant = parse_instant(date).ok_or(Rejection::UnparsableTimestamp)?;
    let timestamp_ns = instant.timestamp_nanos_opt().ok_or(Rejection::Other)?;

    let qty = fields.get("qty").ok_or(Rejection::MissingField("qty"))?;
    let value = parse_quantity(qty).ok_or(Rejection::UnparsableNumber)?;

    let source = fields
        .get("source")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown");

    Ok(Measurement {
        metric: or_unknown(metric),
        unit: or_unknown(unit),
        source: source.to_string(),
        timestamp_ns,
        value,
    })
}

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "unknown".to_string(),
    }
}

/// Parse a date-time string into a timezone-aware instant.
///
/// Accepts RFC 3339, RFC 2822, the `2024-01-01 00:00:00 -0500` shape used
/// by HealthKit auto-export apps, and offset-less date-times (taken as
/// UTC).
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.with_timezone(&Utc));
    }

    // Offset-less forms are interpreted as UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert a raw `qty` value to a 64-bit float.
///
/// Numbers pass through; strings are accepted only when they parse as a
/// float. Null, booleans, arrays, and objects are rejected.
fn parse_quantity(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

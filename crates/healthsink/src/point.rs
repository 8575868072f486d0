// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Time-series point construction.

use crate::normalize::Measurement;

/// Measurement name for every point written by this pipeline.
pub const MEASUREMENT: &str = "healthkit";

/// A value that can be stored in a point field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit floating point.
    Float(f64),
    /// 64-bit signed integer.
    Integer(i64),
    /// UTF-8 string.
    String(String),
    /// Boolean value.
    Boolean(bool),
}

/// The wire-level unit written to the store: one measurement name, a tag
/// set, a field set, and a nanosecond timestamp. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Measurement name.
    pub measurement: String,
    /// Indexed string dimensions, in insertion order.
    pub tags: Vec<(String, String)>,
    /// Measured values.
    pub fields: Vec<(String, FieldValue)>,
    /// Nanoseconds since the Unix epoch.
    pub timestamp_ns: i64,
}

impl Point {
    /// Start a point for the given measurement.
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: Vec::new(),
            fields: Vec::new(),
            timestamp_ns: 0,
        }
    }

    /// Append a tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Append a field.
    pub fn field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((key.into(), value));
        self
    }

    /// Set the timestamp (nanoseconds since epoch).
    pub fn timestamp(mut self, ns: i64) -> Self {
        self.timestamp_ns = ns;
        self
    }

    /// Build the point for a normalized measurement.
    ///
    /// Pure and total: the input is already validated and defaulted, so
    /// there is no failure path. Tag values are taken verbatim.
    pub fn from_measurement(m: &Measurement) -> Self {
        Point::new(MEASUREMENT)
            .tag("metric", &m.metric)
            .tag("source", &m.source)
            .tag("unit", &m.unit)
            .field("value", FieldValue::Float(m.value))
            .timestamp(m.timestamp_ns)
    }
}

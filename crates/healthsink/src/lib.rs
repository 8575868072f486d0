// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Health-metric export ingestion pipeline.
//!
//! Turns bulk health-export payloads (the nested JSON produced by personal
//! health-tracking export apps) into InfluxDB-shaped data points and writes
//! them as a single batch.
//!
//! # Overview
//!
//! ```text
//! JSON payload --> decode --> normalize (per entry) --> Point batch --> BatchWrite
//! ```
//!
//! The pipeline is built around per-entry failure isolation: one malformed
//! reading is counted and dropped, it never aborts its siblings or the
//! batch. The storage backend is an injected [`BatchWrite`] implementation,
//! constructed once at process start and shared across requests.
//!
//! ```no_run
//! # async fn run(writer: &dyn healthsink::BatchWrite) {
//! let payload = serde_json::json!({
//!     "data": { "metrics": [
//!         { "name": "heart_rate", "units": "count/min", "data": [
//!             { "date": "2024-01-01T00:00:00Z", "qty": 72, "source": "Apple Watch" },
//!         ]},
//!     ]}
//! });
//!
//! let summary = healthsink::ingest(writer, &payload).await.unwrap();
//! assert_eq!(summary.written, 1);
//! # }
//! ```

pub mod decode;
pub mod normalize;
pub mod pipeline;
pub mod point;
pub mod write;

pub use decode::{decode_groups, RawGroup};
pub use normalize::{normalize_entry, Measurement, Rejection};
pub use pipeline::{ingest, IngestError, IngestSummary};
pub use point::{FieldValue, Point, MEASUREMENT};
pub use write::{BatchWrite, WriteError};

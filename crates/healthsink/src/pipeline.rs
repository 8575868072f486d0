// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ingestion coordinator.
//!
//! Runs the full pipeline for one request: decode the payload, validate
//! every entry, build points for the valid ones, and hand the batch to the
//! writer in a single call. Rejections are counted, never propagated.

use crate::decode::decode_groups;
use crate::normalize::normalize_entry;
use crate::point::Point;
use crate::write::{BatchWrite, WriteError};
use serde_json::Value;

/// Per-request ingestion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Points accepted by the writer.
    pub written: usize,
    /// Entries rejected during validation.
    pub dropped: usize,
}

/// A failed batch write. The batch is treated as unwritten as a whole; the
/// drop count accumulated before the write is preserved for reporting.
#[derive(Debug, thiserror::Error)]
#[error("batch write failed ({dropped} entries dropped before write): {source}")]
pub struct IngestError {
    /// Entries rejected during validation, before the write was attempted.
    pub dropped: usize,
    /// The underlying write failure.
    #[source]
    pub source: WriteError,
}

/// Ingest one export payload.
///
/// Input order is preserved into the point batch. The writer is not
/// invoked at all when no entry survives validation, so "nothing to write"
/// never reaches the backend as a zero-item write.
pub async fn ingest(
    writer: &dyn BatchWrite,
    payload: &Value,
) -> Result<IngestSummary, IngestError> {
    let mut points = Vec::new();
    let mut dropped = 0usize;

    for group in decode_groups(payload) {
        for entry in group.entries {
            match normalize_entry(entry, group.name, group.units) {
                Ok(measurement) => points.push(Point::from_measurement(&measurement)),
                Err(rejection) => {
                    dropped += 1;
                    log::debug!(
                        "dropping entry for metric {}: {}",
                        group.name.unwrap_or("unknown"),
                        rejection
                    );
                }
            }
        }
    }

    if points.is_empty() {
        return Ok(IngestSummary { written: 0, dropped });
    }

    let written = points.len();
    match writer.write_batch(&points).await {
        Ok(()) => {
            log::info!("wrote {} points, dropped {} entries", written, dropped);
            Ok(IngestSummary { written, dropped })
        }
        Err(source) => Err(IngestError { dropped, source }),
    }
}

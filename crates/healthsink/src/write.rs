// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The batch-write seam.
//!
//! The storage backend is injected behind [`BatchWrite`], constructed once
//! at process start and shared by every request. The pipeline makes exactly
//! one write attempt per batch; retries and per-point error decomposition
//! are the backend's concern, not ours.

use crate::point::Point;
use async_trait::async_trait;

/// Errors surfaced by a batch write.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The backend could not be reached (transport failure, timeout).
    #[error("storage backend unreachable: {0}")]
    Connection(String),
    /// The backend answered but refused the batch.
    #[error("storage backend rejected batch (status {status}): {body}")]
    Rejected {
        /// HTTP status returned by the backend.
        status: u16,
        /// Response body, useful for diagnostics.
        body: String,
    },
}

/// A time-series sink accepting one batch of points per call.
#[async_trait]
pub trait BatchWrite: Send + Sync {
    /// Write all `points` in a single backend call.
    ///
    /// The call is atomic from the pipeline's point of view: on error the
    /// whole batch is treated as unwritten.
    async fn write_batch(&self, points: &[Point]) -> Result<(), WriteError>;
}

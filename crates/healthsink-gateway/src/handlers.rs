// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HTTP request handlers.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use healthsink::WriteError;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Ingestion result reported to the caller.
#[derive(Serialize)]
pub struct IngestResponse {
    pub ok: bool,
    pub written: usize,
    pub dropped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /data - run the ingestion pipeline for one payload.
///
/// A failed backend write returns 5xx with `written: 0`; the batch is
/// unwritten as a whole.
pub async fn ingest(State(state): State<Arc<AppState>>, Json(payload): Json<Value>) -> Response {
    match healthsink::ingest(state.writer(), &payload).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(IngestResponse {
                ok: true,
                written: summary.written,
                dropped: summary.dropped,
                error: None,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("batch write failed: {}", err.source);
            (
                write_failure_status(&err.source),
                Json(IngestResponse {
                    ok: false,
                    written: 0,
                    dropped: err.dropped,
                    error: Some(err.source.to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// GET /data, GET /health - liveness check.
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"ok": true}))).into_response()
}

fn write_failure_status(err: &WriteError) -> StatusCode {
    match err {
        WriteError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        WriteError::Rejected { .. } => StatusCode::BAD_GATEWAY,
    }
}

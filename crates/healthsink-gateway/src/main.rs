// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Healthsink Gateway - HTTP ingestion endpoint for health-metric exports.
//!
//! Accepts bulk export payloads, runs them through the ingestion pipeline,
//! and writes the resulting point batch to InfluxDB v2.
//!
//! # Usage
//!
//! ```bash
//! # Start the gateway on default port 5055
//! healthsink-gateway
//!
//! # Custom port and log level
//! healthsink-gateway --port 8080 --log-level debug
//! ```
//!
//! # Endpoints
//!
//! - `POST /data` - Ingest an export payload
//! - `GET /data` - Health check
//! - `GET /health` - Health check
//!
//! InfluxDB connection settings come from `INFLUX_URL`, `INFLUX_ORG`,
//! `INFLUX_BUCKET`, and `INFLUX_TOKEN`.

mod handlers;
mod routes;

use clap::Parser;
use healthsink::BatchWrite;
use healthsink_influx::{InfluxConfig, InfluxWriter};
use std::sync::Arc;
use tracing::info;

/// Healthsink HTTP ingestion gateway
#[derive(Parser, Debug)]
#[command(name = "healthsink-gateway")]
#[command(about = "HTTP ingestion gateway for health-metric exports")]
#[command(version)]
struct Args {
    /// HTTP server port
    #[arg(short, long, default_value = "5055")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Shared application state: the process-wide batch writer.
pub struct AppState {
    writer: Arc<dyn BatchWrite>,
}

impl AppState {
    fn new(writer: Arc<dyn BatchWrite>) -> Self {
        Self { writer }
    }

    fn writer(&self) -> &dyn BatchWrite {
        self.writer.as_ref()
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();

    let config = InfluxConfig::from_env();
    info!("InfluxDB: {} (org={}, bucket={})", config.url, config.org, config.bucket);

    let writer = InfluxWriter::new(config).expect("Failed to build InfluxDB client");
    let state = Arc::new(AppState::new(Arc::new(writer)));

    let app = routes::router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    info!("Healthsink Gateway v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP server: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}

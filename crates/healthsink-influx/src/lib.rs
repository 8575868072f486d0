// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! InfluxDB v2 write client for the healthsink pipeline.
//!
//! This crate provides:
//! - InfluxDB v2 Line Protocol generation for point batches
//! - An async HTTP write client implementing [`healthsink::BatchWrite`]
//! - Environment-variable connection configuration
//!
//! ```text
//! Vec<Point> --> line protocol body --> POST /api/v2/write?precision=ns
//! ```

pub mod client;
pub mod config;
pub mod line;

pub use client::InfluxWriter;
pub use config::InfluxConfig;

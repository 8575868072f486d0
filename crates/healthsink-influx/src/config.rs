// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! InfluxDB v2 connection configuration from the environment.

use std::env;

/// InfluxDB v2 connection settings.
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// InfluxDB URL (e.g., "http://influxdb:8086").
    pub url: String,
    /// InfluxDB organization.
    pub org: String,
    /// InfluxDB bucket.
    pub bucket: String,
    /// Authentication token.
    pub token: String,
}

impl InfluxConfig {
    /// Read the configuration from `INFLUX_URL`, `INFLUX_ORG`,
    /// `INFLUX_BUCKET`, and `INFLUX_TOKEN`, falling back to the defaults
    /// used by the stock docker-compose deployment.
    pub fn from_env() -> Self {
        Self {
            url: env::var("INFLUX_URL").unwrap_or_else(|_| "http://influxdb:8086".to_string()),
            org: env::var("INFLUX_ORG").unwrap_or_else(|_| "home".to_string()),
            bucket: env::var("INFLUX_BUCKET").unwrap_or_else(|_| "health".to_string()),
            token: env::var("INFLUX_TOKEN").unwrap_or_default(),
        }
    }
}

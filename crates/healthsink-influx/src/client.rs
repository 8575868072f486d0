// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Async InfluxDB v2 write client.

use crate::config::InfluxConfig;
use crate::line;
use async_trait::async_trait;
use healthsink::{BatchWrite, Point, WriteError};
use std::time::Duration;

/// Request timeout for write calls.
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide InfluxDB v2 write client.
///
/// Wraps a shared `reqwest::Client`; one instance is created at startup and
/// reused by every request. Safe for concurrent use.
pub struct InfluxWriter {
    http: reqwest::Client,
    config: InfluxConfig,
    write_url: String,
}

impl InfluxWriter {
    /// Build a writer for the given connection settings.
    pub fn new(config: InfluxConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(WRITE_TIMEOUT).build()?;
        let write_url = write_url(&config);
        Ok(Self {
            http,
            config,
            write_url,
        })
    }
}

/// Build the v2 write endpoint URL with nanosecond precision.
fn write_url(config: &InfluxConfig) -> String {
    format!(
        "{}/api/v2/write?org={}&bucket={}&precision=ns",
        config.url.trim_end_matches('/'),
        config.org,
        config.bucket
    )
}

#[async_trait]
impl BatchWrite for InfluxWriter {
    async fn write_batch(&self, points: &[Point]) -> Result<(), WriteError> {
        let body = line::encode_batch(points);
        log::debug!("writing {} lines to {}", points.len(), self.write_url);

        let response = self
            .http
            .post(&self.write_url)
            .header("Authorization", format!("Token {}", self.config.token))
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|err| WriteError::Connection(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(WriteError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_url_shape() {
        let config = InfluxConfig {
            url: "http://influxdb:8086".to_string(),
            org: "home".to_string(),
            bucket: "health".to_string(),
            token: String::new(),
        };

        assert_eq!(
            write_url(&config),
            "http://influxdb:8086/api/v2/write?org=home&bucket=health&precision=ns"
        );
    }

    #[test]
    fn test_write_url_trims_trailing_slash() {
        let config = InfluxConfig {
            url: "http://influxdb:8086/".to_string(),
            org: "o".to_string(),
            bucket: "b".to_string(),
            token: String::new(),
        };

        assert_eq!(
            write_url(&config),
            "http://influxdb:8086/api/v2/write?org=o&bucket=b&precision=ns"
        );
    }
}

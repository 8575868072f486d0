// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Payload decoding.
//!
//! Walks the nested export structure and yields a flat sequence of metric
//! groups. The expected shape is:
//!
//! ```text
//! { "data": { "metrics": [ { "name", "units", "data": [entry, ...] }, ... ] } }
//! ```
//!
//! Absence of the nested keys means "no metrics present", not a malformed
//! request: every missing-structure case degrades to an empty result. A
//! metrics element that is not a mapping cannot have its readings addressed
//! individually and is skipped as a whole.

use serde_json::Value;

/// Borrowed view over one decoded metric group.
///
/// `name` and `units` are only taken when they are JSON strings; anything
/// else is treated as absent and defaulted downstream. `entries` are still
/// untrusted and go through per-entry validation.
#[derive(Debug, Clone, Copy)]
pub struct RawGroup<'a> {
    /// Metric name, e.g. `heart_rate`.
    pub name: Option<&'a str>,
    /// Unit label, e.g. `count/min`.
    pub units: Option<&'a str>,
    /// Raw readings, one JSON value per reading.
    pub entries: &'a [Value],
}

/// Decode the top-level payload into an ordered sequence of metric groups.
pub fn decode_groups(payload: &Value) -> Vec<RawGroup<'_>> {
    let Some(metrics) = payload
        .get("data")
        .and_then(|data| data.get("metrics"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    metrics
        .iter()
        .filter_map(|metric| {
            let group = metric.as_object()?;
            Some(RawGroup {
                name: group.get("name").and_then(Value::as_str),
                units: group.get("units").and_then(Value::as_str),
                entries: group
                    .get("data")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_missing_data_key() {
        assert!(decode_groups(&json!({})).is_empty());
        assert!(decode_groups(&json!({"other": 1})).is_empty());
    }

    #[test]
    fn test_decode_missing_metrics_key() {
        assert!(decode_groups(&json!({"data": {}})).is_empty());
        assert!(decode_groups(&json!({"data": {"metrics": null}})).is_empty());
    }

    #[test]
    fn test_decode_non_mapping_payload() {
        assert!(decode_groups(&json!([1, 2, 3])).is_empty());
        assert!(decode_groups(&json!("hello")).is_empty());
        assert!(decode_groups(&json!(null)).is_empty());
    }

    #[test]
    fn test_decode_metrics_not_an_array() {
        assert!(decode_groups(&json!({"data": {"metrics": {"name": "x"}}})).is_empty());
    }

    #[test]
    fn test_decode_single_group() {
        let payload = json!({
            "data": { "metrics": [
                { "name": "heart_rate", "units": "count/min", "data": [
                    { "date": "2024-01-01T00:00:00Z", "qty": 72 },
                ]},
            ]}
        });

        let groups = decode_groups(&payload);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, Some("heart_rate"));
        assert_eq!(groups[0].units, Some("count/min"));
        assert_eq!(groups[0].entries.len(), 1);
    }

    #[test]
    fn test_decode_group_without_data_key() {
        let payload = json!({
            "data": { "metrics": [ { "name": "steps", "units": "count" } ] }
        });

        let groups = decode_groups(&payload);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].entries.is_empty());
    }

    #[test]
    fn test_decode_group_data_not_an_array() {
        let payload = json!({
            "data": { "metrics": [ { "name": "steps", "data": "oops" } ] }
        });

        let groups = decode_groups(&payload);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].entries.is_empty());
    }

    #[test]
    fn test_decode_non_mapping_group_skipped() {
        let payload = json!({
            "data": { "metrics": [
                "not-a-group",
                42,
                { "name": "steps", "units": "count", "data": [ { "date": "d", "qty": 1 } ] },
            ]}
        });

        let groups = decode_groups(&payload);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, Some("steps"));
    }

    #[test]
    fn test_decode_non_string_name_and_units_treated_as_absent() {
        let payload = json!({
            "data": { "metrics": [ { "name": 5, "units": null, "data": [] } ] }
        });

        let groups = decode_groups(&payload);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, None);
        assert_eq!(groups[0].units, None);
    }

    #[test]
    fn test_decode_preserves_group_order() {
        let payload = json!({
            "data": { "metrics": [
                { "name": "a", "data": [] },
                { "name": "b", "data": [] },
                { "name": "c", "data": [] },
            ]}
        });

        let names: Vec<_> = decode_groups(&payload).iter().map(|g| g.name).collect();
        assert_eq!(names, vec![Some("a"), Some("b"), Some("c")]);
    }
}

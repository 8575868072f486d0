// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! InfluxDB v2 Line Protocol encoding.
//!
//! Line Protocol format:
//! ```text
//! measurement,tag1=val1,tag2=val2 field1=val1,field2=val2 timestamp_ns
//! ```
//!
//! See: <https://docs.influxdata.com/influxdb/v2/reference/syntax/line-protocol/>

use healthsink::{FieldValue, Point};

/// Encode one point as a Line Protocol line.
///
/// Tags are sorted by key for canonical output. Points without fields are
/// not representable in Line Protocol and must not reach this function;
/// the pipeline always builds exactly one field per point.
pub fn encode_point(point: &Point) -> String {
    let mut line = escape_measurement(&point.measurement);

    let mut sorted_tags: Vec<_> = point.tags.iter().collect();
    sorted_tags.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (key, value) in sorted_tags {
        line.push(',');
        line.push_str(&escape_tag(key));
        line.push('=');
        line.push_str(&escape_tag(value));
    }

    line.push(' ');
    for (i, (key, value)) in point.fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape_tag(key));
        line.push('=');
        line.push_str(&render_field_value(value));
    }

    line.push(' ');
    line.push_str(&point.timestamp_ns.to_string());

    line
}

/// Encode a batch as a newline-joined write body.
pub fn encode_batch(points: &[Point]) -> String {
    points
        .iter()
        .map(encode_point)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a field value for Line Protocol.
///
/// - Float: written as-is (e.g., `3.14`)
/// - Integer: suffixed with `i` (e.g., `42i`)
/// - String: double-quoted, inner quotes and backslashes escaped
/// - Boolean: `true` or `false`
fn render_field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Float(v) => format!("{}", v),
        FieldValue::Integer(v) => format!("{}i", v),
        FieldValue::String(v) => {
            let escaped = v.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{}\"", escaped)
        }
        FieldValue::Boolean(v) => {
            if *v {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
    }
}

/// Escape a measurement name. Spaces and commas must be escaped.
fn escape_measurement(s: &str) -> String {
    s.replace(',', "\\,").replace(' ', "\\ ")
}

/// Escape a tag key, tag value, or field key. Commas, equals signs, and
/// spaces must be escaped.
fn escape_tag(s: &str) -> String {
    s.replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> Point {
        Point::new("healthkit")
            .tag("metric", "heart_rate")
            .tag("source", "Apple Watch")
            .tag("unit", "count/min")
            .field("value", FieldValue::Float(72.0))
            .timestamp(1_704_067_200_000_000_000)
    }

    #[test]
    fn test_encode_simple_point() {
        let point = Point::new("temperature")
            .field("value", FieldValue::Float(23.5))
            .timestamp(1_000_000_000);

        assert_eq!(encode_point(&point), "temperature value=23.5 1000000000");
    }

    #[test]
    fn test_encode_health_point_escapes_source_space() {
        assert_eq!(
            encode_point(&sample_point()),
            "healthkit,metric=heart_rate,source=Apple\\ Watch,unit=count/min \
             value=72 1704067200000000000"
        );
    }

    #[test]
    fn test_encode_sorts_tags_by_key() {
        let point = Point::new("m")
            .tag("zeta", "1")
            .tag("alpha", "2")
            .field("value", FieldValue::Integer(1))
            .timestamp(1);

        assert_eq!(encode_point(&point), "m,alpha=2,zeta=1 value=1i 1");
    }

    #[test]
    fn test_encode_escapes_special_chars() {
        let point = Point::new("my measurement")
            .tag("tag key", "tag,value")
            .field("field=key", FieldValue::String("say \"hi\"".to_string()))
            .timestamp(3);

        assert_eq!(
            encode_point(&point),
            "my\\ measurement,tag\\ key=tag\\,value field\\=key=\"say \\\"hi\\\"\" 3"
        );
    }

    #[test]
    fn test_render_field_value_variants() {
        assert_eq!(render_field_value(&FieldValue::Float(3.15)), "3.15");
        assert_eq!(render_field_value(&FieldValue::Integer(42)), "42i");
        assert_eq!(
            render_field_value(&FieldValue::String("hello".to_string())),
            "\"hello\""
        );
        assert_eq!(render_field_value(&FieldValue::Boolean(true)), "true");
        assert_eq!(render_field_value(&FieldValue::Boolean(false)), "false");
    }

    #[test]
    fn test_encode_batch_joins_with_newlines() {
        let a = Point::new("m")
            .field("value", FieldValue::Integer(1))
            .timestamp(1);
        let b = Point::new("m")
            .field("value", FieldValue::Integer(2))
            .timestamp(2);

        assert_eq!(encode_batch(&[a, b]), "m value=1i 1\nm value=2i 2");
    }

    #[test]
    fn test_encode_batch_empty() {
        assert_eq!(encode_batch(&[]), "");
    }

    #[test]
    fn test_encode_negative_timestamp() {
        // Pre-1970 instants are valid nanosecond epochs.
        let point = Point::new("m")
            .field("value", FieldValue::Float(1.0))
            .timestamp(-1_000_000_000);

        assert_eq!(encode_point(&point), "m value=1 -1000000000");
    }
}

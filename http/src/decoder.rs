//! Response decoding for newline-delimited query results.

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::error::{HttpError, HttpResult};

/// Decode a response body into individual result records.
///
/// Servers stream one JSON record per line. Every line must decode; a
/// malformed line fails the whole call rather than yielding a partial
/// result set. An empty body is an empty result set.
pub fn decode_body(body: &str) -> HttpResult<Vec<JsonValue>> {
    let mut records = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: JsonValue = serde_json::from_str(line).map_err(|source| {
            warn!(%line, "undecodable response line");
            HttpError::Decode {
                line: line.to_string(),
                source,
            }
        })?;
        records.push(unwrap_record(record));
    }
    Ok(records)
}

/// Records arrive as `{"value": ...}` or `{"row": ...}` envelopes; anything
/// else passes through whole.
fn unwrap_record(record: JsonValue) -> JsonValue {
    match record {
        JsonValue::Object(mut map) => {
            if let Some(value) = map.remove("value") {
                value
            } else if let Some(row) = map.remove("row") {
                row
            } else {
                JsonValue::Object(map)
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body() {
        assert_eq!(decode_body("").unwrap(), Vec::<JsonValue>::new());
        assert_eq!(decode_body("\n\n").unwrap(), Vec::<JsonValue>::new());
    }

    #[test]
    fn test_ndjson_records() {
        let body = "{\"value\": {\"gid\": \"gene:BRAF\"}}\n{\"row\": [1, 2]}\n{\"count\": 2}\n";
        let records = decode_body(body).unwrap();
        assert_eq!(
            records,
            vec![
                json!({ "gid": "gene:BRAF" }),
                json!([1, 2]),
                json!({ "count": 2 }),
            ]
        );
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let body = "{\"value\": 1}\nnot json\n";
        let err = decode_body(body).unwrap_err();
        match err {
            HttpError::Decode { line, .. } => assert_eq!(line, "not json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_scalar_record_passes_through() {
        let records = decode_body("42\n").unwrap();
        assert_eq!(records, vec![json!(42)]);
    }
}

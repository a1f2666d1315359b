//! Versioned on-disk layout for persisted blobs.
//!
//! Every blob is written as `{"version": N, "data": ...}`. Blobs without the
//! envelope are the legacy untagged layout and are read as version 0.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RepsError, Result};

/// Layout version written by this build.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T: ?Sized> {
    version: u32,
    data: &'a T,
}

/// Serialize `data` inside a current-version envelope.
pub fn encode<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let envelope = Envelope {
        version: FORMAT_VERSION,
        data,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a blob, upgrading older layouts to the current one.
///
/// # Errors
///
/// Returns `RepsError::Schema` if the blob is not JSON, was written by a
/// newer build, or does not match `T` after migration.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw)?;
    let (version, data) = split_envelope(value)?;
    let data = migrate(version, data)?;
    Ok(serde_json::from_value(data)?)
}

fn split_envelope(value: Value) -> Result<(u32, Value)> {
    match value {
        Value::Object(mut map) if map.contains_key("version") && map.contains_key("data") => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| RepsError::Schema("Envelope version is not a number".to_string()))?;
            let data = map
                .remove("data")
                .ok_or_else(|| RepsError::Schema("Envelope data missing".to_string()))?;
            Ok((version, data))
        }
        legacy => Ok((0, legacy)),
    }
}

fn migrate(mut version: u32, mut data: Value) -> Result<Value> {
    if version > FORMAT_VERSION {
        return Err(RepsError::Schema(format!(
            "Unsupported format version {} (newest known is {})",
            version, FORMAT_VERSION
        )));
    }

    while version < FORMAT_VERSION {
        data = match version {
            // v1 only introduced the envelope; the payload shape is unchanged.
            0 => data,
            other => {
                return Err(RepsError::Schema(format!(
                    "No migration from format version {}",
                    other
                )))
            }
        };
        version += 1;
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wraps_in_envelope() {
        let encoded = encode(&vec![1, 2, 3]).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_decode_legacy_bare_array() {
        let decoded: Vec<String> = decode(r#"["a","b"]"#).unwrap();
        assert_eq!(decoded, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_decode_legacy_object_with_data_field() {
        // The legacy weather cache has a `data` field but no `version`.
        let raw = r#"{"data":{"x":1},"timestamp":5}"#;
        let decoded: Value = decode(raw).unwrap();
        assert_eq!(decoded["timestamp"], 5);
        assert_eq!(decoded["data"]["x"], 1);
    }

    #[test]
    fn test_decode_rejects_future_version() {
        let raw = r#"{"version":99,"data":[]}"#;
        let err = decode::<Vec<u32>>(raw).unwrap_err();
        assert!(matches!(err, RepsError::Schema(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode::<Vec<u32>>("not json").is_err());
        assert!(decode::<Vec<u32>>(r#"{"version":"one","data":[]}"#).is_err());
    }
}

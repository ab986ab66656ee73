//! JSON encoding and decoding of shapes.
//!
//! Thin wrappers over `serde_json` that report failures through the common
//! [`Error`](elemental_common::Error) type.

use elemental_common::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode a shape from JSON text.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a shape from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a shape as compact JSON. Unset fields are omitted.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a shape as pretty-printed JSON. Unset fields are omitted.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

//! JSON conversion helpers.
//!
//! # Design
//! Serialization is pretty-printed and leaves `<`, `>`, and `&` as literal
//! characters, so serialized values can be compared byte-wise against raw
//! JSON fixtures. Deserialization failures are hard errors; there is no
//! lenient path for malformed response bodies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Serialize `value` to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Deserialize JSON `text` into a `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Deserialization(e.to_string()))
}

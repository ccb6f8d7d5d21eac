//! Error types for the API test helpers.
//!
//! # Design
//! One variant per failure class. Transport and cipher problems carry the
//! underlying library's message as a string so the enum stays independent of
//! the HTTP and crypto crates' error types.

use std::fmt;

/// Errors returned by the dispatcher and codec helpers.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be delivered, or the response body not read.
    Transport(String),

    /// A method string did not name one of the supported HTTP methods.
    InvalidMethod(String),

    /// The value could not be serialized to JSON.
    Serialization(String),

    /// The JSON text could not be deserialized into the expected type.
    Deserialization(String),

    /// The cipher key was shorter than the 8 bytes DES requires.
    InvalidKeyLength(usize),

    /// The ciphertext was not valid Base64, not a whole number of cipher
    /// blocks, carried bad padding, or decrypted to non-UTF-8 bytes.
    Ciphertext(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::InvalidMethod(name) => write!(f, "unsupported HTTP method: {name}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::InvalidKeyLength(len) => {
                write!(f, "cipher key must be at least 8 bytes, got {len}")
            }
            ApiError::Ciphertext(msg) => write!(f, "undecryptable ciphertext: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

//! Request dispatch and payload codec helpers for HTTP API test suites.
//!
//! # Overview
//! Wraps the plumbing an API test needs but should not re-implement per
//! suite: building and dispatching HTTP requests, enforcing success-status
//! contracts, converting values to and from JSON, reading `key=value`
//! property files, and decoding a legacy DES-encrypted response field.
//!
//! # Design
//! - `Dispatcher` is stateless apart from its HTTP agent; every call builds
//!   a fresh request and blocks until the response arrives.
//! - Request methods form a closed enum; an unrecognized method string is
//!   an error, never a silent fallback.
//! - Soft failures (unreadable property file, undecryptable field) log and
//!   return empty results; everything else is a typed `ApiError`.
//! - `Dispatcher::insecure()` disables TLS verification for test
//!   environments with self-signed certificates. It is never the default.

pub mod client;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod http;

pub use client::Dispatcher;
pub use error::ApiError;
pub use http::{ApiResponse, ContentType, Method, RequestSpec};

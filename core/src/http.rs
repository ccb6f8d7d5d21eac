//! Plain-data request and response types.
//!
//! # Design
//! `RequestSpec` describes a request as owned data, built fresh per call and
//! handed to `Dispatcher::send`. The method set is closed: a string outside
//! GET/POST/PATCH/DELETE/HEAD fails to parse instead of falling back to a
//! default method.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    /// Case-insensitive. Anything outside the supported set is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            other => Err(ApiError::InvalidMethod(other.to_string())),
        }
    }
}

/// MIME type attached to a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Xml,
    Text,
    UrlEncoded,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Text => "text/plain",
            ContentType::UrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Query pairs are appended to the URL, headers are applied verbatim, the
/// body is attached only when present and non-empty, and the content type
/// only when provided.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub content_type: Option<ContentType>,
}

impl RequestSpec {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            content_type: None,
        }
    }
}

/// The outcome of a dispatched request. Owned by the caller.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub elapsed: Duration,
}

impl ApiResponse {
    /// True for the statuses the success contract accepts (200 and 201).
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }

    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        codec::from_json(&self.body)
    }
}

//! Synchronous request dispatcher.
//!
//! # Design
//! `Dispatcher` holds only a configured `ureq::Agent` and carries no mutable
//! state between calls. The agent reports 4xx/5xx responses as data rather
//! than `Err`, so status interpretation stays here: callers either inspect
//! `ApiResponse::status` themselves or opt into the success contract via
//! `enforce_success`, which fails the enclosing test on anything other than
//! 200 or 201.

use std::time::Instant;

use log::{debug, error};
use ureq::tls::TlsConfig;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, RequestBuilder};

use crate::error::ApiError;
use crate::http::{ApiResponse, ContentType, Method, RequestSpec};

/// Blocking HTTP dispatcher for API test suites.
#[derive(Clone)]
pub struct Dispatcher {
    agent: Agent,
}

impl Dispatcher {
    /// Dispatcher with standard TLS validation.
    pub fn new() -> Self {
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            agent: config.new_agent(),
        }
    }

    /// INSECURE MODE: accepts any server certificate and hostname.
    ///
    /// For test environments fronted by self-signed certificates only.
    /// Never use this against anything but a disposable test deployment,
    /// and never make it the default construction path.
    pub fn insecure() -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(TlsConfig::builder().disable_verification(true).build())
            .build();
        Self {
            agent: config.new_agent(),
        }
    }

    /// Dispatch `spec` and block until the response arrives.
    ///
    /// Query pairs are appended to the URL, headers applied verbatim, the
    /// body attached only when present and non-empty (POST and PATCH; the
    /// other methods are dispatched without a payload), and the content type
    /// only when provided.
    ///
    /// With `enforce_success` set, a status other than 200 or 201 logs the
    /// code and panics, failing the enclosing test. Without it, every status
    /// is returned as data. Transport failures are always `Err`.
    pub fn send(&self, spec: &RequestSpec, enforce_success: bool) -> Result<ApiResponse, ApiError> {
        debug!("dispatching {} {}", spec.method, spec.url);
        let started = Instant::now();
        let result = match spec.method {
            Method::Get => dispatch_without_body(self.agent.get(&spec.url), spec),
            Method::Delete => dispatch_without_body(self.agent.delete(&spec.url), spec),
            Method::Head => dispatch_without_body(self.agent.head(&spec.url), spec),
            Method::Post => dispatch_with_body(self.agent.post(&spec.url), spec),
            Method::Patch => dispatch_with_body(self.agent.patch(&spec.url), spec),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let elapsed = started.elapsed();

        if enforce_success && !matches!(status, 200 | 201) {
            error!("HTTP status check failed: {status}");
            panic!("HTTP status check failed: {status}");
        }
        Ok(ApiResponse {
            status,
            body,
            elapsed,
        })
    }

    /// GET without headers.
    pub fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        enforce_success: bool,
    ) -> Result<ApiResponse, ApiError> {
        self.get_with_headers(url, query, &[], enforce_success)
    }

    /// GET with headers.
    pub fn get_with_headers(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
        enforce_success: bool,
    ) -> Result<ApiResponse, ApiError> {
        let mut spec = RequestSpec::new(Method::Get, url);
        spec.query = owned_pairs(query);
        spec.headers = owned_pairs(headers);
        self.send(&spec, enforce_success)
    }

    /// POST with headers and body; no query parameters.
    pub fn post_with_headers(
        &self,
        url: &str,
        body: &str,
        headers: &[(&str, &str)],
        content_type: Option<ContentType>,
        enforce_success: bool,
    ) -> Result<ApiResponse, ApiError> {
        let mut spec = RequestSpec::new(Method::Post, url);
        spec.body = Some(body.to_string());
        spec.headers = owned_pairs(headers);
        spec.content_type = content_type;
        self.send(&spec, enforce_success)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn dispatch_without_body(
    mut builder: RequestBuilder<WithoutBody>,
    spec: &RequestSpec,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    for (key, value) in &spec.query {
        builder = builder.query(key.as_str(), value.as_str());
    }
    for (name, value) in &spec.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(content_type) = spec.content_type {
        builder = builder.header("Content-Type", content_type.as_str());
    }
    builder.call()
}

fn dispatch_with_body(
    mut builder: RequestBuilder<WithBody>,
    spec: &RequestSpec,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    for (key, value) in &spec.query {
        builder = builder.query(key.as_str(), value.as_str());
    }
    for (name, value) in &spec.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(content_type) = spec.content_type {
        builder = builder.header("Content-Type", content_type.as_str());
    }
    match spec.body.as_deref().filter(|body| !body.is_empty()) {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Snapshot of a request as received by the `/echo` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Counters reported by `/stats`. Only `/echo` hits are counted, so a test
/// can read its own stats without skewing them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stats {
    pub echo_requests: u64,
}

type Hits = Arc<AtomicU64>;

pub fn app() -> Router {
    let hits: Hits = Arc::new(AtomicU64::new(0));
    Router::new()
        .route("/echo", any(echo))
        .route("/status/{code}", any(status_code))
        .route("/stats", get(stats))
        .with_state(hits)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    State(hits): State<Hits>,
    method: Method,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Json<EchoedRequest> {
    hits.fetch_add(1, Ordering::SeqCst);
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(EchoedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    })
}

async fn status_code(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn stats(State(hits): State<Hits>) -> Json<Stats> {
    Json(Stats {
        echo_requests: hits.load(Ordering::SeqCst),
    })
}

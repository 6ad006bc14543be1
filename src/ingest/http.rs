//! HTTP transport for the ingestion endpoint.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /api/telegram/admin`: body `{telegram_user_id, text}`, shared
//!   secret in the `X-TELEGRAM_SECRET` header.
//! - `GET /health`: returns `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use matchday::ingest::{self, Ingestor};
//! use matchday::{IngestConfig, InMemoryStore};
//!
//! let ingestor = Arc::new(Ingestor::new(IngestConfig::from_env(), InMemoryStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = ingest::router(ingestor.clone());
//!
//! // Or serve directly
//! ingest::serve(ingestor, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::request::IngestRequest;
use super::service::Ingestor;
use crate::store::Store;

/// Header carrying the shared secret.
pub const SECRET_HEADER: &str = "x-telegram_secret";

/// Path of the command endpoint.
pub const INGEST_PATH: &str = "/api/telegram/admin";

/// Build an axum `Router` serving the ingestion endpoint.
pub fn router<S: Store + 'static>(ingestor: Arc<Ingestor<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(INGEST_PATH, post(ingest_handler::<S>))
        .with_state(ingestor)
}

/// Serve the endpoint over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: Store + 'static>(
    ingestor: Arc<Ingestor<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(ingestor);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr, "ingest endpoint listening");
    axum::serve(listener, app).await
}

/// `GET /health`: returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `POST /api/telegram/admin`: run the command in the body.
async fn ingest_handler<S: Store + 'static>(
    State(ingestor): State<Arc<Ingestor<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let secret = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
    let request = IngestRequest::from_body(&body);
    let response = ingestor.handle(secret, &request);
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body))
}

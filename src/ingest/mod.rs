//! ingest: the boundary that turns a chat message into a store update.
//!
//! A messaging transport (a chat bot relay) posts `{telegram_user_id, text}`
//! with a shared secret. The [`Ingestor`] authenticates the request, checks
//! the caller against the admin allow-list, then parses and executes the
//! command text, answering with a JSON payload and an HTTP-style status:
//!
//! ```json
//! { "ok": true, "message": "Match 12 updated.", "data": { "match_id": 12, "score": "3-1", "notes": null } }
//! { "ok": false, "error": "Match not found.", "kind": "not_found" }
//! ```

mod error;
mod request;
mod service;

pub use error::IngestError;
pub use request::{CallerId, IngestRequest, IngestResponse};
pub use service::Ingestor;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve, INGEST_PATH, SECRET_HEADER};

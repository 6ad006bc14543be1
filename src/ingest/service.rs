//! Ingestor: the endpoint contract between a messaging transport and the core.
//!
//! `Ingestor<S>` holds the configuration and a store. Checks run in a fixed
//! order, and the first failure wins:
//!
//! 1. shared secret configured, else `500`;
//! 2. secret header matches, else `401`;
//! 3. caller id and text present, else `400`;
//! 4. caller on the allow-list, else `403`;
//! 5. text parses, else `400` with the usage hint;
//! 6. command applies, else `404`/`400`.
//!
//! ## Example
//!
//! ```
//! use matchday::ingest::{IngestRequest, Ingestor};
//! use matchday::{IngestConfig, InMemoryStore};
//!
//! let config = IngestConfig::new(Some("s3cret".into()), ["123".to_string()]);
//! let ingestor = Ingestor::new(config, InMemoryStore::new());
//!
//! let response = ingestor.handle(
//!     Some("s3cret"),
//!     &IngestRequest::new("123", "/match 1 score 2-0"),
//! );
//! assert_eq!(response.status, 404); // no match 1 in an empty store
//! ```

use tracing::{debug, instrument, warn};

use super::error::IngestError;
use super::request::{IngestRequest, IngestResponse};
use crate::command::parse;
use crate::config::IngestConfig;
use crate::executor::{execute, Outcome};
use crate::store::Store;

/// Accepts command submissions and applies them to a store.
pub struct Ingestor<S> {
    config: IngestConfig,
    store: S,
}

impl<S: Store> Ingestor<S> {
    pub fn new(config: IngestConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Run the full boundary checks, then parse and apply the command.
    ///
    /// `secret` is the value of the shared-secret header, if sent.
    #[instrument(skip_all)]
    pub fn ingest(
        &self,
        secret: Option<&str>,
        request: &IngestRequest,
    ) -> Result<Outcome, IngestError> {
        let expected = self.config.secret()?;
        if secret != Some(expected) {
            return Err(IngestError::InvalidSecret);
        }

        let caller_id = request
            .telegram_user_id
            .as_ref()
            .and_then(|id| id.normalized())
            .ok_or(IngestError::MissingFields)?;
        let text = request
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or(IngestError::MissingFields)?;

        if !self.config.is_admin(&caller_id)? {
            return Err(IngestError::Unauthorized(caller_id));
        }

        self.submit(&caller_id, text)
    }

    /// Parse and apply `text` on behalf of an already-authorized caller.
    #[instrument(skip(self))]
    pub fn submit(&self, caller_id: &str, text: &str) -> Result<Outcome, IngestError> {
        let command = parse(text)?;
        debug!(match_id = command.match_id(), "executing command");
        Ok(execute(&command, &self.store)?)
    }

    /// Like [`ingest`](Self::ingest), rendered as a status and JSON body.
    pub fn handle(&self, secret: Option<&str>, request: &IngestRequest) -> IngestResponse {
        let result = self.ingest(secret, request);
        if let Err(error) = &result {
            warn!(kind = %error.kind(), %error, "command rejected");
        }
        IngestResponse::from(result)
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

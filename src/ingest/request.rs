//! Wire types for the ingestion endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::IngestError;
use crate::executor::Outcome;

/// Caller id as sent by the bot: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallerId {
    Number(i64),
    Text(String),
}

impl CallerId {
    /// String form used for allow-list lookups, compared verbatim. `None`
    /// for `0` or an empty string, which the endpoint treats as absent.
    pub fn normalized(&self) -> Option<String> {
        match self {
            CallerId::Number(0) => None,
            CallerId::Number(n) => Some(n.to_string()),
            CallerId::Text(s) if s.is_empty() => None,
            CallerId::Text(s) => Some(s.clone()),
        }
    }
}

/// An inbound command submission.
///
/// ```json
/// { "telegram_user_id": 123456, "text": "/match 12 score 3-1" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub telegram_user_id: Option<CallerId>,
    #[serde(default)]
    pub text: Option<String>,
}

impl IngestRequest {
    pub fn new(caller_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            telegram_user_id: Some(CallerId::Text(caller_id.into())),
            text: Some(text.into()),
        }
    }

    /// Decode a request body. Anything that is not a JSON object with the
    /// expected fields decodes to an empty request, which then fails the
    /// missing-fields check.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Response from ingesting a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// `{ok, message, data}` or `{ok: false, error, kind, hint?}`.
    pub body: Value,
}

impl IngestResponse {
    pub fn success(outcome: &Outcome) -> Self {
        Self {
            status: 200,
            body: json!({
                "ok": true,
                "message": outcome.message(),
                "data": outcome.data(),
            }),
        }
    }

    pub fn failure(error: &IngestError) -> Self {
        let mut body = json!({
            "ok": false,
            "error": error.to_string(),
            "kind": error.kind(),
        });
        if let Some(hint) = error.hint() {
            body["hint"] = Value::from(hint);
        }
        Self {
            status: error.status_code(),
            body,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl From<Result<Outcome, IngestError>> for IngestResponse {
    fn from(result: Result<Outcome, IngestError>) -> Self {
        match result {
            Ok(outcome) => Self::success(&outcome),
            Err(error) => Self::failure(&error),
        }
    }
}

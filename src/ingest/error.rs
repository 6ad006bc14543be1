//! Error type for the ingestion boundary.

use crate::command::ParseError;
use crate::config::ConfigError;
use crate::error::ErrorKind;
use crate::executor::ExecuteError;

/// Everything that can stop an inbound command, from envelope checks to
/// store writes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Deployment is missing the shared secret or the allow-list.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shared-secret header absent or wrong.
    #[error("Invalid secret.")]
    InvalidSecret,

    /// Request lacked the caller id or the command text.
    #[error("Missing telegram_user_id or text.")]
    MissingFields,

    /// Caller is not on the allow-list.
    #[error("User not authorized.")]
    Unauthorized(String),

    /// Command text did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Command parsed but could not be applied.
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IngestError::Config(e) => e.kind(),
            IngestError::InvalidSecret => ErrorKind::Unauthenticated,
            IngestError::MissingFields => ErrorKind::BadRequest,
            IngestError::Unauthorized(_) => ErrorKind::Unauthorized,
            IngestError::Parse(_) => ErrorKind::ParseError,
            IngestError::Execute(e) => e.kind(),
        }
    }

    /// Remediation hint to echo back, when there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            IngestError::Config(e) => e.hint(),
            IngestError::MissingFields => Some("Provide telegram_user_id and text fields."),
            IngestError::Parse(e) => Some(e.hint()),
            IngestError::Execute(e) => e.hint(),
            IngestError::InvalidSecret | IngestError::Unauthorized(_) => None,
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

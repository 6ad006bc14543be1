/// Machine-checkable classification shared by every error the crate reports.
///
/// Serialized in snake_case into the `kind` field of error payloads.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Command text did not match the grammar.
    ParseError,
    /// Request envelope lacked a required field.
    BadRequest,
    /// Referenced match or player does not exist.
    NotFound,
    /// Identifier matched more than one player.
    Ambiguous,
    /// Shared secret missing or wrong.
    Unauthenticated,
    /// Caller is not on the allow-list.
    Unauthorized,
    /// Vote rejected by eligibility rules.
    Rejected,
    /// Deployment is missing required configuration.
    Configuration,
    /// Backing store failed.
    Storage,
}

impl ErrorKind {
    /// Map this kind to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::ParseError => 400,
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Ambiguous => 400,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Unauthorized => 403,
            ErrorKind::Rejected => 422,
            ErrorKind::Configuration => 500,
            ErrorKind::Storage => 500,
        }
    }
}

//! Error type for command text parsing.

/// Usage line echoed back to the caller whenever a command fails to parse.
pub const USAGE: &str = "Use /match <id> score <home>-<away> [notes \"...\"] or /match <id> stats <player> goals=0 y=0 r=0 played=1";

/// A command line that could not be turned into a [`Command`](super::Command).
///
/// Parsing is all-or-nothing, so a `ParseError` never accompanies a partial
/// result. The reason is human-readable and meant to be shown to the sender.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ParseError {
    reason: String,
}

impl ParseError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The human-readable reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Remediation hint: the expected grammar.
    pub fn hint(&self) -> &'static str {
        USAGE
    }
}

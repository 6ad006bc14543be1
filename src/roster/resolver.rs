//! Free-text player identifier resolution.
//!
//! Two tiers, tried in order:
//!
//! 1. **exact**: the normalized identifier equals `"first last"`, `"first"`
//!    or `"last"` of a player (all lowercased);
//! 2. **partial**, only when the exact tier found nothing: the identifier is
//!    a substring of exactly one player's `"first last"`.
//!
//! More than one exact match is terminal: the partial tier never runs to
//! break an exact-tier tie.

use tracing::debug;

use super::{Player, PlayerId};

/// Why an identifier did not resolve to a single player.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No player matched, or the partial tier matched several.
    #[error("Player not found.")]
    NotFound { identifier: String },

    /// Several players matched exactly.
    #[error("Player identifier '{identifier}' is ambiguous.")]
    Ambiguous {
        identifier: String,
        candidates: Vec<PlayerId>,
    },
}

impl ResolveError {
    /// Remediation hint for the sender.
    pub fn hint(&self) -> &'static str {
        "Use full name or last name."
    }
}

/// Resolve `identifier` against a directory snapshot.
pub fn resolve<'a>(identifier: &str, directory: &'a [Player]) -> Result<&'a Player, ResolveError> {
    let normalized = identifier.trim().to_lowercase();
    let not_found = || ResolveError::NotFound {
        identifier: identifier.to_string(),
    };
    if normalized.is_empty() {
        return Err(not_found());
    }

    let exact: Vec<&Player> = directory
        .iter()
        .filter(|player| {
            normalized == player.full_name().to_lowercase()
                || normalized == player.first_name.to_lowercase()
                || normalized == player.last_name.to_lowercase()
        })
        .collect();

    match exact.as_slice() {
        [player] => {
            debug!(identifier, player_id = player.id, "resolved exact match");
            return Ok(*player);
        }
        [] => {}
        several => {
            return Err(ResolveError::Ambiguous {
                identifier: identifier.to_string(),
                candidates: several.iter().map(|player| player.id).collect(),
            });
        }
    }

    let mut partial = directory.iter().filter(|player| {
        format!("{} {}", player.first_name, player.last_name)
            .to_lowercase()
            .contains(&normalized)
    });

    match (partial.next(), partial.next()) {
        (Some(player), None) => {
            debug!(identifier, player_id = player.id, "resolved partial match");
            Ok(player)
        }
        _ => Err(not_found()),
    }
}

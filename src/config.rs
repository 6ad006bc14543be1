//! Ingestion configuration, read from the environment.
//!
//! | Variable                 | Meaning                                         |
//! |--------------------------|-------------------------------------------------|
//! | `TELEGRAM_INGEST_SECRET` | Shared secret expected in `X-TELEGRAM_SECRET`   |
//! | `TELEGRAM_ADMIN_IDS`     | Comma-separated caller ids allowed to submit    |

use std::collections::BTreeSet;

use crate::error::ErrorKind;

pub const SECRET_VAR: &str = "TELEGRAM_INGEST_SECRET";
pub const ADMIN_IDS_VAR: &str = "TELEGRAM_ADMIN_IDS";

/// A required setting is absent. Fatal for every request until redeployed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Server not configured for Telegram ingest.")]
    MissingSecret,

    #[error("No TELEGRAM_ADMIN_IDS configured.")]
    NoAdmins,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MissingSecret => ErrorKind::Configuration,
            // An empty allow-list admits nobody; reported as a refusal.
            ConfigError::NoAdmins => ErrorKind::Unauthorized,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingSecret => None,
            ConfigError::NoAdmins => Some("Set TELEGRAM_ADMIN_IDS=123,456."),
        }
    }
}

/// Settings for the ingestion boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestConfig {
    secret: Option<String>,
    admin_ids: BTreeSet<String>,
}

impl IngestConfig {
    pub fn new(secret: Option<String>, admin_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            admin_ids: admin_ids
                .into_iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let admin_ids = lookup(ADMIN_IDS_VAR).unwrap_or_default();
        Self::new(
            lookup(SECRET_VAR),
            admin_ids.split(',').map(str::to_string),
        )
    }

    /// The shared secret, or `MissingSecret`.
    pub fn secret(&self) -> Result<&str, ConfigError> {
        self.secret.as_deref().ok_or(ConfigError::MissingSecret)
    }

    pub fn admin_ids(&self) -> &BTreeSet<String> {
        &self.admin_ids
    }

    /// Whether `caller_id` is on the allow-list. `Err(NoAdmins)` when the
    /// allow-list is empty.
    pub fn is_admin(&self, caller_id: &str) -> Result<bool, ConfigError> {
        if self.admin_ids.is_empty() {
            return Err(ConfigError::NoAdmins);
        }
        Ok(self.admin_ids.contains(caller_id))
    }
}

//! Store: the persistence boundary consumed by the executor, tally and voting.
//!
//! The crate does not own persistence. Production deployments implement
//! [`Store`] over their relational database; [`InMemoryStore`] is the
//! reference implementation used by tests and the development server.
//!
//! ## Atomicity
//!
//! Every write method replaces exactly one record keyed by its natural key.
//! A command therefore touches the store with a single write, and an
//! implementation only needs row-level atomicity for that write (last writer
//! wins on concurrent upserts of the same key).
//!
//! ```
//! use matchday::{InMemoryStore, Store};
//!
//! let store = InMemoryStore::new();
//! assert!(store.get_match(1).unwrap().is_none());
//! ```

mod fixture;
mod in_memory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::roster::{Player, PlayerId};

pub use fixture::Fixture;
pub use in_memory::InMemoryStore;

pub type MatchId = i64;
pub type SeasonId = i64;

/// Lifecycle state of a match.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Played,
    Cancelled,
}

/// A fixture of the club's season. `home_score` is the club's own score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub season_id: SeasonId,
    pub date: NaiveDate,
    pub opponent: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Match {
    pub fn new(
        id: MatchId,
        season_id: SeasonId,
        date: NaiveDate,
        opponent: impl Into<String>,
    ) -> Self {
        Self {
            id,
            season_id,
            date,
            opponent: opponent.into(),
            location: None,
            status: MatchStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            notes: None,
        }
    }

    /// `"home-away"`.
    pub fn score_line(&self) -> String {
        format!("{}-{}", self.home_score, self.away_score)
    }
}

/// One player's line in one match. Unique per `(match_id, player_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStat {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub played: bool,
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl MatchStat {
    /// A fresh, unsaved stat row.
    pub fn new(match_id: MatchId, player_id: PlayerId) -> Self {
        Self {
            match_id,
            player_id,
            played: true,
            goals: 0,
            yellow_cards: 0,
            red_cards: 0,
        }
    }
}

/// An MVP vote. Unique per `(match_id, voter_id)`; `voter_id != voted_player_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub match_id: MatchId,
    pub voter_id: PlayerId,
    pub voted_player_id: PlayerId,
}

/// Error type for store operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A lock guarding in-process storage was poisoned.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// Storage-level failure reported by the backing store.
    #[error("store error: {0}")]
    Storage(String),
}

/// Persistence operations the core depends on.
pub trait Store: Send + Sync {
    /// Look up a match by id.
    fn get_match(&self, id: MatchId) -> Result<Option<Match>, StoreError>;

    /// The stored stat row for `(match_id, player_id)`, or a fresh unsaved
    /// one when none exists yet. Persist it with [`Store::save_stat`].
    fn get_or_create_stat(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<MatchStat, StoreError>;

    /// Every known player; the directory snapshot used for identifier resolution.
    fn list_players(&self) -> Result<Vec<Player>, StoreError>;

    /// Players with an active membership in the season, ordered by
    /// `(last_name, first_name)`.
    fn list_active_roster(&self, season_id: SeasonId) -> Result<Vec<Player>, StoreError>;

    /// All votes cast for a match.
    fn list_votes(&self, match_id: MatchId) -> Result<Vec<Vote>, StoreError>;

    /// Overwrite a match record.
    fn save_match(&self, record: &Match) -> Result<(), StoreError>;

    /// Upsert a stat row by `(match_id, player_id)`.
    fn save_stat(&self, stat: &MatchStat) -> Result<(), StoreError>;

    /// Upsert a vote by `(match_id, voter_id)`.
    fn save_vote(&self, vote: &Vote) -> Result<(), StoreError>;
}

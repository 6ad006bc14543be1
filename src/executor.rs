//! Executor: applies a parsed [`Command`] to the store.
//!
//! Both command kinds overwrite rather than accumulate, so replaying the same
//! command leaves the store exactly as the first application did. Each
//! command ends in a single store write; validation failures return before
//! anything is written.

use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::command::{Command, ScoreUpdate, StatUpdate};
use crate::error::ErrorKind;
use crate::roster::{resolve, Player, ResolveError};
use crate::store::{Match, MatchId, MatchStat, Store, StoreError};

/// Error type for command execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("Match not found.")]
    MatchNotFound(MatchId),

    #[error(transparent)]
    Player(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExecuteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecuteError::MatchNotFound(_) => ErrorKind::NotFound,
            ExecuteError::Player(ResolveError::NotFound { .. }) => ErrorKind::NotFound,
            ExecuteError::Player(ResolveError::Ambiguous { .. }) => ErrorKind::Ambiguous,
            ExecuteError::Store(_) => ErrorKind::Storage,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ExecuteError::Player(err) => Some(err.hint()),
            _ => None,
        }
    }
}

/// The effect of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The match record after the score write.
    ScoreUpdated(Match),
    /// The resolved player and their stat row after the upsert.
    StatsUpdated { player: Player, stat: MatchStat },
}

impl Outcome {
    /// Confirmation line for the sender.
    pub fn message(&self) -> String {
        match self {
            Outcome::ScoreUpdated(record) => format!("Match {} updated.", record.id),
            Outcome::StatsUpdated { player, .. } => {
                format!("Stats updated for {} {}.", player.first_name, player.last_name)
            }
        }
    }

    /// Structured echo of what was stored.
    pub fn data(&self) -> Value {
        match self {
            Outcome::ScoreUpdated(record) => json!({
                "match_id": record.id,
                "score": record.score_line(),
                "notes": record.notes,
            }),
            Outcome::StatsUpdated { stat, .. } => json!({
                "match_id": stat.match_id,
                "player_id": stat.player_id,
                "goals": stat.goals,
                "yellow_cards": stat.yellow_cards,
                "red_cards": stat.red_cards,
                "played": stat.played,
            }),
        }
    }
}

/// Validate `command` against the store and apply it.
#[instrument(skip(store), fields(match_id = command.match_id()))]
pub fn execute<S: Store + ?Sized>(command: &Command, store: &S) -> Result<Outcome, ExecuteError> {
    match command {
        Command::ScoreUpdate(update) => apply_score(update, store),
        Command::StatUpdate(update) => apply_stats(update, store),
    }
}

fn find_match<S: Store + ?Sized>(store: &S, match_id: MatchId) -> Result<Match, ExecuteError> {
    store
        .get_match(match_id)?
        .ok_or(ExecuteError::MatchNotFound(match_id))
}

fn apply_score<S: Store + ?Sized>(
    update: &ScoreUpdate,
    store: &S,
) -> Result<Outcome, ExecuteError> {
    let mut record = find_match(store, update.match_id)?;

    record.home_score = update.home_score;
    record.away_score = update.away_score;
    if let Some(notes) = &update.notes {
        record.notes = Some(notes.clone());
    }
    store.save_match(&record)?;

    info!(match_id = record.id, score = %record.score_line(), "match score updated");
    Ok(Outcome::ScoreUpdated(record))
}

fn apply_stats<S: Store + ?Sized>(update: &StatUpdate, store: &S) -> Result<Outcome, ExecuteError> {
    let record = find_match(store, update.match_id)?;
    let directory = store.list_players()?;
    let player = resolve(&update.player_identifier, &directory)?.clone();

    let mut stat = store.get_or_create_stat(record.id, player.id)?;
    stat.played = update.played;
    stat.goals = update.goals;
    stat.yellow_cards = update.yellow_cards;
    stat.red_cards = update.red_cards;
    store.save_stat(&stat)?;

    info!(
        match_id = record.id,
        player_id = player.id,
        goals = stat.goals,
        "player stats updated"
    );
    Ok(Outcome::StatsUpdated { player, stat })
}

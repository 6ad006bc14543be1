//! MVP voting: vote submission and published results.

use tracing::{info, instrument};

use crate::error::ErrorKind;
use crate::roster::PlayerId;
use crate::store::{MatchId, MatchStatus, Store, StoreError, Vote};
use crate::tally::{tally, TallyResult};

/// Error type for vote submission and result lookup.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("Match not found.")]
    MatchNotFound(MatchId),

    /// The voted player is not on the active roster of the match's season.
    #[error("Selected player is not eligible.")]
    NotEligible(PlayerId),

    #[error("You cannot vote for yourself.")]
    SelfVote,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VoteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VoteError::MatchNotFound(_) => ErrorKind::NotFound,
            VoteError::NotEligible(_) | VoteError::SelfVote => ErrorKind::Rejected,
            VoteError::Store(_) => ErrorKind::Storage,
        }
    }
}

/// Record `voter_id`'s MVP pick for a match.
///
/// A voter has at most one vote per match; voting again replaces the earlier
/// pick.
#[instrument(skip(store))]
pub fn cast_vote<S: Store + ?Sized>(
    store: &S,
    match_id: MatchId,
    voter_id: PlayerId,
    voted_player_id: PlayerId,
) -> Result<Vote, VoteError> {
    let record = store
        .get_match(match_id)?
        .ok_or(VoteError::MatchNotFound(match_id))?;

    let eligible = store
        .list_active_roster(record.season_id)?
        .iter()
        .any(|player| player.id == voted_player_id);
    if !eligible {
        return Err(VoteError::NotEligible(voted_player_id));
    }
    if voter_id == voted_player_id {
        return Err(VoteError::SelfVote);
    }

    let vote = Vote {
        match_id,
        voter_id,
        voted_player_id,
    };
    store.save_vote(&vote)?;

    info!(match_id, voter_id, voted_player_id, "mvp vote recorded");
    Ok(vote)
}

/// The MVP standings of a match.
///
/// Results are only published once the match is marked played; before that
/// the tally is empty even if votes exist.
#[instrument(skip(store))]
pub fn mvp_results<S: Store + ?Sized>(
    store: &S,
    match_id: MatchId,
) -> Result<TallyResult, VoteError> {
    let record = store
        .get_match(match_id)?
        .ok_or(VoteError::MatchNotFound(match_id))?;
    if record.status != MatchStatus::Played {
        return Ok(TallyResult::default());
    }

    let votes = store.list_votes(match_id)?;
    let directory = store.list_players()?;
    Ok(tally(&votes, &directory))
}

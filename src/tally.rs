//! MVP tally: ranks the players of one match by votes received.
//!
//! Ordering is `(votes desc, last name asc, first name asc, player id asc)`, so
//! identical input always yields identical output. Voted players missing from
//! the directory rank after named players with the same count.
//!
//! The tally trusts its input: one vote per voter and no self-votes are
//! enforced by the store and by [`cast_vote`](crate::voting::cast_vote).

use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::roster::{Player, PlayerId};
use crate::store::Vote;

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub player_id: PlayerId,
    pub vote_count: usize,
}

/// Ranked, sparse vote counts for a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallyResult {
    /// Players with at least one vote, best first.
    pub entries: Vec<TallyEntry>,
    /// Everyone tied at `max_votes`. Empty when nobody voted.
    pub winners: BTreeSet<PlayerId>,
    pub max_votes: usize,
}

impl TallyResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count and rank `votes`.
#[instrument(skip_all, fields(votes = votes.len()))]
pub fn tally(votes: &[Vote], directory: &[Player]) -> TallyResult {
    let players: HashMap<PlayerId, &Player> = directory.iter().map(|p| (p.id, p)).collect();
    let sort_name = |id: &PlayerId| match players.get(id) {
        Some(player) => (false, player.last_name.as_str(), player.first_name.as_str()),
        None => (true, "", ""),
    };

    let entries: Vec<TallyEntry> = votes
        .iter()
        .map(|vote| vote.voted_player_id)
        .counts()
        .into_iter()
        .sorted_by(|(a_id, a_count), (b_id, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| sort_name(a_id).cmp(&sort_name(b_id)))
                .then_with(|| a_id.cmp(b_id))
        })
        .map(|(player_id, vote_count)| TallyEntry {
            player_id,
            vote_count,
        })
        .collect();

    let max_votes = entries.first().map_or(0, |entry| entry.vote_count);
    let winners = entries
        .iter()
        .take_while(|entry| entry.vote_count == max_votes)
        .map(|entry| entry.player_id)
        .collect();

    debug!(max_votes, ranked = entries.len(), "tallied votes");
    TallyResult {
        entries,
        winners,
        max_votes,
    }
}

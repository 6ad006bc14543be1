//! MVP voting through the public API.

use std::collections::BTreeSet;

use matchday::{cast_vote, mvp_results, tally, Store, VoteError};

use crate::support::club_store;

#[test]
fn revotes_count_once() {
    let store = club_store();
    // Final picks: John and Anna for Rossi, Luca for Bianchi, Marco for John.
    cast_vote(&store, 12, 2, 1).unwrap();
    cast_vote(&store, 12, 3, 1).unwrap();
    cast_vote(&store, 12, 1, 4).unwrap();
    cast_vote(&store, 12, 2, 4).unwrap(); // John changes his mind
    cast_vote(&store, 12, 2, 1).unwrap(); // and back again
    cast_vote(&store, 12, 4, 2).unwrap();

    let results = mvp_results(&store, 12).unwrap();
    let ranking: Vec<(i64, usize)> = results
        .entries
        .iter()
        .map(|e| (e.player_id, e.vote_count))
        .collect();
    assert_eq!(ranking, vec![(1, 2), (4, 1), (2, 1)]);
    assert_eq!(results.max_votes, 2);
    assert_eq!(results.winners, BTreeSet::from([1]));
}

#[test]
fn multi_way_tie() {
    let store = club_store();
    cast_vote(&store, 12, 1, 4).unwrap();
    cast_vote(&store, 12, 4, 1).unwrap();
    cast_vote(&store, 12, 2, 3).unwrap();

    let results = mvp_results(&store, 12).unwrap();
    // Bianchi < Rossi < Smith
    let order: Vec<i64> = results.entries.iter().map(|e| e.player_id).collect();
    assert_eq!(order, vec![4, 1, 3]);
    assert_eq!(results.winners, BTreeSet::from([1, 3, 4]));
}

#[test]
fn unplayed_match_publishes_nothing() {
    let store = club_store();
    cast_vote(&store, 5, 1, 2).unwrap();
    assert!(mvp_results(&store, 5).unwrap().is_empty());

    // The raw tally still sees the vote.
    let raw = tally(&store.list_votes(5).unwrap(), &store.list_players().unwrap());
    assert_eq!(raw.max_votes, 1);
}

#[test]
fn no_votes_means_no_winner() {
    let store = club_store();
    let results = mvp_results(&store, 12).unwrap();
    assert_eq!(results.max_votes, 0);
    assert!(results.winners.is_empty());
    assert!(results.entries.is_empty());
}

#[test]
fn self_votes_refused() {
    let store = club_store();
    assert_eq!(cast_vote(&store, 12, 1, 1), Err(VoteError::SelfVote));
}

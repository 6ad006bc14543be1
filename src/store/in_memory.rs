//! InMemoryStore - lock-guarded tables for testing and development.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Fixture, Match, MatchId, MatchStat, SeasonId, Store, StoreError, Vote};
use crate::roster::{MembershipStatus, Player, PlayerId, RosterMembership};

#[derive(Default)]
struct Tables {
    players: BTreeMap<PlayerId, Player>,
    matches: HashMap<MatchId, Match>,
    roster: Vec<RosterMembership>,
    stats: BTreeMap<(MatchId, PlayerId), MatchStat>,
    votes: BTreeMap<(MatchId, PlayerId), Vote>,
}

/// In-memory store backed by ordered maps under one `RwLock`.
///
/// Every write is a single keyed insert under the write lock, which gives
/// each upsert the row-level atomicity the executor relies on.
/// Clone-friendly via Arc; clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a fixture.
    pub fn from_fixture(fixture: Fixture) -> Result<Self, StoreError> {
        let store = Self::new();
        {
            let mut tables = store.write("from_fixture")?;
            for player in fixture.players {
                tables.players.insert(player.id, player);
            }
            for record in fixture.matches {
                tables.matches.insert(record.id, record);
            }
            tables.roster = fixture.roster;
            for stat in fixture.stats {
                tables.stats.insert((stat.match_id, stat.player_id), stat);
            }
            for vote in fixture.votes {
                tables.votes.insert((vote.match_id, vote.voter_id), vote);
            }
        }
        Ok(store)
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Add or replace a player.
    pub fn insert_player(&self, player: Player) -> Result<(), StoreError> {
        self.write("insert_player")?.players.insert(player.id, player);
        Ok(())
    }

    /// Add or replace a match.
    pub fn insert_match(&self, record: Match) -> Result<(), StoreError> {
        self.save_match(&record)
    }

    /// Record a roster membership.
    pub fn add_membership(&self, membership: RosterMembership) -> Result<(), StoreError> {
        self.write("add_membership")?.roster.push(membership);
        Ok(())
    }

    /// The saved stat row, if any. Unlike [`Store::get_or_create_stat`] this
    /// never fabricates a row.
    pub fn get_stat(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<Option<MatchStat>, StoreError> {
        Ok(self
            .read("get_stat")?
            .stats
            .get(&(match_id, player_id))
            .cloned())
    }

    /// All saved stat rows of a match, ordered by player id.
    pub fn list_stats(&self, match_id: MatchId) -> Result<Vec<MatchStat>, StoreError> {
        Ok(self
            .read("list_stats")?
            .stats
            .range((match_id, PlayerId::MIN)..=(match_id, PlayerId::MAX))
            .map(|(_, stat)| stat.clone())
            .collect())
    }
}

impl Store for InMemoryStore {
    fn get_match(&self, id: MatchId) -> Result<Option<Match>, StoreError> {
        Ok(self.read("get_match")?.matches.get(&id).cloned())
    }

    fn get_or_create_stat(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
    ) -> Result<MatchStat, StoreError> {
        Ok(self
            .get_stat(match_id, player_id)?
            .unwrap_or_else(|| MatchStat::new(match_id, player_id)))
    }

    fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.read("list_players")?.players.values().cloned().collect())
    }

    fn list_active_roster(&self, season_id: SeasonId) -> Result<Vec<Player>, StoreError> {
        let tables = self.read("list_active_roster")?;
        let mut players: Vec<Player> = tables
            .roster
            .iter()
            .filter(|m| m.season_id == season_id && m.status == MembershipStatus::Active)
            .filter_map(|m| tables.players.get(&m.player_id).cloned())
            .collect();
        players.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        players.dedup_by_key(|p| p.id);
        Ok(players)
    }

    fn list_votes(&self, match_id: MatchId) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .read("list_votes")?
            .votes
            .range((match_id, PlayerId::MIN)..=(match_id, PlayerId::MAX))
            .map(|(_, vote)| vote.clone())
            .collect())
    }

    fn save_match(&self, record: &Match) -> Result<(), StoreError> {
        self.write("save_match")?
            .matches
            .insert(record.id, record.clone());
        Ok(())
    }

    fn save_stat(&self, stat: &MatchStat) -> Result<(), StoreError> {
        self.write("save_stat")?
            .stats
            .insert((stat.match_id, stat.player_id), stat.clone());
        Ok(())
    }

    fn save_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        self.write("save_vote")?
            .votes
            .insert((vote.match_id, vote.voter_id), vote.clone());
        Ok(())
    }
}

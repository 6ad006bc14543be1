//! JSON seed data for [`InMemoryStore`](super::InMemoryStore).
//!
//! ```json
//! {
//!   "players": [{ "id": 1, "first_name": "Luca", "last_name": "Rossi" }],
//!   "matches": [{ "id": 5, "season_id": 1, "date": "2025-03-09", "opponent": "Rovers" }],
//!   "roster": [{ "season_id": 1, "player_id": 1 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{Match, MatchStat, Vote};
use crate::roster::{Player, RosterMembership};

/// A snapshot of store contents. Every table is optional in the JSON form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub roster: Vec<RosterMembership>,
    pub stats: Vec<MatchStat>,
    pub votes: Vec<Vote>,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

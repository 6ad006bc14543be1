//! Roster: players, season memberships, and identifier resolution.

mod resolver;

use serde::{Deserialize, Serialize};

use crate::store::SeasonId;

pub use resolver::{resolve, ResolveError};

pub type PlayerId = i64;

/// A player directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Player {
    pub fn new(id: PlayerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            jersey_number: None,
            is_active: true,
        }
    }

    /// `"first last"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Membership state of a player in a season's roster.
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
pub enum MembershipStatus {
    #[default]
    Active,
    Inactive,
}

/// A player's membership in one season's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMembership {
    pub season_id: SeasonId,
    pub player_id: PlayerId,
    #[serde(default)]
    pub status: MembershipStatus,
}

//! Command: the text-command language submitted by the messaging channel.
//!
//! One line of text parses into exactly one [`Command`]:
//!
//! ```text
//! /match 12 score 3-1 notes "Great first half"
//! /match 5 stats Luca goals=2 y=1 r=0 played=1
//! ```
//!
//! ```
//! use matchday::command::{parse, Command};
//!
//! let command = parse("/match 12 score 3-1").unwrap();
//! assert!(matches!(command, Command::ScoreUpdate(ref s) if s.home_score == 3));
//! ```

mod error;
mod lexer;
mod parser;

use serde::{Deserialize, Serialize};

use crate::store::MatchId;

pub use error::{ParseError, USAGE};
pub use lexer::tokenize;
pub use parser::parse;

/// A parsed, validated command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "score")]
    ScoreUpdate(ScoreUpdate),
    #[serde(rename = "stats")]
    StatUpdate(StatUpdate),
}

impl Command {
    /// The match this command targets.
    pub fn match_id(&self) -> MatchId {
        match self {
            Command::ScoreUpdate(score) => score.match_id,
            Command::StatUpdate(stats) => stats.match_id,
        }
    }
}

/// `/match <id> score <home>-<away> [notes "..."]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub match_id: MatchId,
    pub home_score: u32,
    pub away_score: u32,
    /// `None` leaves the stored notes untouched.
    pub notes: Option<String>,
}

/// `/match <id> stats <player> goals=N y=N r=N played=0|1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatUpdate {
    pub match_id: MatchId,
    /// Free-text player reference, resolved against the player directory.
    pub player_identifier: String,
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub played: bool,
}

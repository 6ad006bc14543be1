pub mod command;
mod config;
mod error;
mod executor;
pub mod ingest;
pub mod roster;
pub mod store;
mod tally;
pub mod voting;

pub use command::{parse, Command, ParseError, ScoreUpdate, StatUpdate};
pub use config::{ConfigError, IngestConfig};
pub use error::ErrorKind;
pub use executor::{execute, ExecuteError, Outcome};
pub use ingest::{IngestError, IngestRequest, IngestResponse, Ingestor};
pub use roster::{resolve, Player, PlayerId, ResolveError, RosterMembership};
pub use store::{
    Fixture, InMemoryStore, Match, MatchId, MatchStat, MatchStatus, SeasonId, Store, StoreError,
    Vote,
};
pub use tally::{tally, TallyEntry, TallyResult};
pub use voting::{cast_vote, mvp_results, VoteError};

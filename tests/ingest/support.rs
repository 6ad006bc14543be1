//! Shared club fixture for ingestion tests.

use matchday::{Fixture, InMemoryStore, IngestConfig, Ingestor};

pub const SECRET: &str = "s3cret";
pub const ADMIN: &str = "123456";

/// Season 1 roster: Luca Rossi, John Smith, Anna Smith, Marco Bianchi.
/// Match 12 is played, match 5 is scheduled.
pub const CLUB: &str = r#"{
    "players": [
        { "id": 1, "first_name": "Luca", "last_name": "Rossi", "jersey_number": 9 },
        { "id": 2, "first_name": "John", "last_name": "Smith" },
        { "id": 3, "first_name": "Anna", "last_name": "Smith" },
        { "id": 4, "first_name": "Marco", "last_name": "Bianchi" }
    ],
    "matches": [
        { "id": 12, "season_id": 1, "date": "2025-04-12", "opponent": "Rovers", "status": "played", "notes": "Windy" },
        { "id": 5, "season_id": 1, "date": "2025-04-19", "opponent": "United" }
    ],
    "roster": [
        { "season_id": 1, "player_id": 1 },
        { "season_id": 1, "player_id": 2 },
        { "season_id": 1, "player_id": 3 },
        { "season_id": 1, "player_id": 4 }
    ]
}"#;

pub fn club_store() -> InMemoryStore {
    InMemoryStore::from_fixture(Fixture::from_json(CLUB).unwrap()).unwrap()
}

pub fn config() -> IngestConfig {
    IngestConfig::new(Some(SECRET.into()), [ADMIN.to_string(), "777".to_string()])
}

pub fn club_ingestor() -> Ingestor<InMemoryStore> {
    Ingestor::new(config(), club_store())
}

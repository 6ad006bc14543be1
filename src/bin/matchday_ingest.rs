//! Development server for the ingestion endpoint.
//!
//! Environment:
//! - `TELEGRAM_INGEST_SECRET`, `TELEGRAM_ADMIN_IDS`: see [`IngestConfig`];
//! - `MATCHDAY_BIND`: listen address, default `0.0.0.0:3000`;
//! - `MATCHDAY_FIXTURE`: optional JSON file seeding the in-memory store;
//! - `RUST_LOG`: log filter, default `info`.

use std::error::Error;
use std::sync::Arc;

use matchday::ingest::{self, Ingestor};
use matchday::{Fixture, InMemoryStore, IngestConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = IngestConfig::from_env();
    if config.secret().is_err() {
        warn!("TELEGRAM_INGEST_SECRET is not set; every request will be refused");
    }
    if config.admin_ids().is_empty() {
        warn!("TELEGRAM_ADMIN_IDS is empty; every caller will be refused");
    }

    let store = match std::env::var("MATCHDAY_FIXTURE") {
        Ok(path) => {
            let fixture = Fixture::from_json(&std::fs::read_to_string(&path)?)?;
            info!(
                path = %path,
                players = fixture.players.len(),
                matches = fixture.matches.len(),
                "seeding store from fixture"
            );
            InMemoryStore::from_fixture(fixture)?
        }
        Err(_) => InMemoryStore::new(),
    };

    let bind = std::env::var("MATCHDAY_BIND").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let ingestor = Arc::new(Ingestor::new(config, store));
    ingest::serve(ingestor, &bind).await?;
    Ok(())
}

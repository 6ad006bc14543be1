//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use matchday::ingest::{self, INGEST_PATH};
use matchday::{InMemoryStore, IngestConfig, Ingestor, Store};
use serde_json::json;

use crate::support::{club_ingestor, club_store, ADMIN, SECRET};

/// Bind to port 0 and return the actual address.
async fn start_server(ingestor: Arc<Ingestor<InMemoryStore>>) -> String {
    let app = ingest::router(ingestor);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_server(Arc::new(club_ingestor())).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn score_update_over_http() {
    let ingestor = Arc::new(club_ingestor());
    let base = start_server(ingestor.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}{INGEST_PATH}"))
        .header("X-TELEGRAM_SECRET", SECRET)
        .json(&json!({ "telegram_user_id": 123456, "text": "/match 12 score 4-0" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["score"], "4-0");
    assert_eq!(ingestor.store().get_match(12).unwrap().unwrap().home_score, 4);
}

#[tokio::test]
async fn wrong_secret_is_401() {
    let base = start_server(Arc::new(club_ingestor())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}{INGEST_PATH}"))
        .header("X-TELEGRAM_SECRET", "guess")
        .json(&json!({ "telegram_user_id": ADMIN, "text": "/match 12 score 4-0" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid secret.");
}

#[tokio::test]
async fn unconfigured_server_is_500() {
    let ingestor = Ingestor::new(IngestConfig::new(None, [ADMIN.to_string()]), club_store());
    let base = start_server(Arc::new(ingestor)).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}{INGEST_PATH}"))
        .json(&json!({ "telegram_user_id": ADMIN, "text": "/match 12 score 4-0" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn non_json_body_is_missing_fields() {
    let base = start_server(Arc::new(club_ingestor())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}{INGEST_PATH}"))
        .header("X-TELEGRAM_SECRET", SECRET)
        .body("text=/match 12 score 1-0")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing telegram_user_id or text.");
    assert_eq!(body["hint"], "Provide telegram_user_id and text fields.");
}

#[tokio::test]
async fn parse_error_over_http() {
    let base = start_server(Arc::new(club_ingestor())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}{INGEST_PATH}"))
        .header("X-TELEGRAM_SECRET", SECRET)
        .json(&json!({ "telegram_user_id": ADMIN, "text": "/match 12 stats Luca goals=1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing fields: y, r, played.");
    assert_eq!(body["kind"], "parse_error");
}

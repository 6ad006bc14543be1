//! End-to-end command ingestion against the in-memory store.

use matchday::{ErrorKind, IngestError, IngestRequest, Store};
use serde_json::json;

use crate::support::{club_ingestor, ADMIN, SECRET};

fn send(text: &str) -> IngestRequest {
    IngestRequest::new(ADMIN, text)
}

#[test]
fn score_then_stats_lifecycle() {
    let ingestor = club_ingestor();

    let response = ingestor.handle(
        Some(SECRET),
        &send(r#"/match 12 score 3-1 notes "Great first half""#),
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body["message"], "Match 12 updated.");

    let response = ingestor.handle(
        Some(SECRET),
        &send("/match 12 stats Luca goals=2 y=1 r=0 played=1"),
    );
    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({
            "ok": true,
            "message": "Stats updated for Luca Rossi.",
            "data": {
                "match_id": 12,
                "player_id": 1,
                "goals": 2,
                "yellow_cards": 1,
                "red_cards": 0,
                "played": true,
            },
        })
    );

    let record = ingestor.store().get_match(12).unwrap().unwrap();
    assert_eq!(record.score_line(), "3-1");
    assert_eq!(record.notes.as_deref(), Some("Great first half"));
}

#[test]
fn replayed_stats_do_not_accumulate() {
    let ingestor = club_ingestor();
    let line = "/match 12 stats bianchi goals=2 y=1 r=0 played=1";

    let first = ingestor.handle(Some(SECRET), &send(line));
    let after_first = ingestor.store().list_stats(12).unwrap();
    let second = ingestor.handle(Some(SECRET), &send(line));
    let after_second = ingestor.store().list_stats(12).unwrap();

    assert_eq!(first.body, second.body);
    assert_eq!(after_first, after_second);
    assert_eq!(after_second.len(), 1);
    assert_eq!(after_second[0].goals, 2);
}

#[test]
fn replayed_score_is_idempotent() {
    let ingestor = club_ingestor();
    let line = "/match 5 score 0-2";
    ingestor.submit(ADMIN, line).unwrap();
    let once = ingestor.store().get_match(5).unwrap();
    ingestor.submit(ADMIN, line).unwrap();
    assert_eq!(ingestor.store().get_match(5).unwrap(), once);
}

#[test]
fn score_without_notes_preserves_notes() {
    let ingestor = club_ingestor();
    ingestor.submit(ADMIN, "/match 12 score 1-1").unwrap();
    let record = ingestor.store().get_match(12).unwrap().unwrap();
    assert_eq!(record.notes.as_deref(), Some("Windy"));
}

#[test]
fn stats_correction_overwrites_every_field() {
    let ingestor = club_ingestor();
    ingestor
        .submit(ADMIN, r#"/match 5 stats "john smith" goals=3 y=1 r=1 played=1"#)
        .unwrap();
    ingestor
        .submit(ADMIN, r#"/match 5 stats "john smith" goals=0 y=0 r=0 played=0"#)
        .unwrap();

    let stat = ingestor.store().get_stat(5, 2).unwrap().unwrap();
    assert_eq!((stat.goals, stat.yellow_cards, stat.red_cards, stat.played), (0, 0, 0, false));
}

#[test]
fn ambiguous_surname_is_refused() {
    let ingestor = club_ingestor();
    let response = ingestor.handle(
        Some(SECRET),
        &send("/match 12 stats smith goals=1 y=0 r=0 played=1"),
    );
    assert_eq!(response.status, 400);
    assert_eq!(response.body["kind"], "ambiguous");
    assert_eq!(response.body["hint"], "Use full name or last name.");
    assert!(ingestor.store().list_stats(12).unwrap().is_empty());
}

#[test]
fn unknown_player_and_match() {
    let ingestor = club_ingestor();

    let response = ingestor.handle(
        Some(SECRET),
        &send("/match 12 stats Pele goals=1 y=0 r=0 played=1"),
    );
    assert_eq!(response.status, 404);
    assert_eq!(response.body["error"], "Player not found.");

    let response = ingestor.handle(Some(SECRET), &send("/match 404 score 1-0"));
    assert_eq!(response.status, 404);
    assert_eq!(
        response.body,
        json!({ "ok": false, "error": "Match not found.", "kind": "not_found" })
    );
}

#[test]
fn malformed_text_never_touches_store() {
    let ingestor = club_ingestor();
    let before = ingestor.store().get_match(12).unwrap();

    for line in [
        "/match 12 score 3-x",
        "/match 12 score 3--1",
        r#"/match 12 score 3-1 notes "unterminated"#,
        "/match 12 stats Luca goals=1 y=0 r=0",
    ] {
        let err = ingestor.submit(ADMIN, line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError, "{line}");
    }

    assert_eq!(ingestor.store().get_match(12).unwrap(), before);
    assert!(ingestor.store().list_stats(12).unwrap().is_empty());
}

#[test]
fn boundary_checks_precede_parsing() {
    let ingestor = club_ingestor();
    let garbage = IngestRequest::new("999", "not a command");

    assert_eq!(ingestor.ingest(Some("nope"), &garbage), Err(IngestError::InvalidSecret));
    assert_eq!(
        ingestor.ingest(Some(SECRET), &garbage),
        Err(IngestError::Unauthorized("999".into()))
    );
    assert_eq!(ingestor.handle(Some(SECRET), &garbage).status, 403);
}

#[test]
fn padded_caller_id_is_not_an_admin() {
    let ingestor = club_ingestor();
    let padded = IngestRequest::new(format!(" {ADMIN} "), "/match 12 score 3-1");

    assert_eq!(
        ingestor.ingest(Some(SECRET), &padded),
        Err(IngestError::Unauthorized(format!(" {ADMIN} ")))
    );
    assert_eq!(ingestor.store().get_match(12).unwrap().unwrap().home_score, 0);
}

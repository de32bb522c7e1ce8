//! Persistence tests that require a running MongoDB.
//!
//! Ignored by default; run with a reachable store:
//!
//! ```sh
//! MONGO_URL=mongodb://localhost:27017 cargo test -p guestbook-api -- --ignored
//! ```
//!
//! Each test writes into a dedicated test database with per-run unique
//! usernames, so repeated runs do not interfere with each other.

mod common;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, post_json};
use mongodb::bson::doc;
use mongodb::Collection;

use guestbook_api::config::ServerConfig;
use guestbook_api::router::build_app_router;
use guestbook_api::state::AppState;
use guestbook_db::models::submission::Submission;

fn live_config() -> ServerConfig {
    ServerConfig {
        mongo_url: std::env::var("MONGO_URL")
            .expect("live-store tests need MONGO_URL set to a reachable MongoDB"),
        mongo_db: "guestbook_test".to_string(),
        ..common::test_config()
    }
}

/// Build the app against the live store, returning the collection handle
/// alongside it so assertions can inspect what was persisted.
async fn build_live_app() -> (Router, Collection<Submission>) {
    let config = live_config();
    let client = guestbook_db::create_client(&config.mongo_url, Duration::from_secs(5))
        .await
        .unwrap();

    let state = AppState::new(client, config.clone());
    let submissions = state.submissions.clone();
    (build_app_router(state, &config), submissions)
}

/// A username no other run has used, so count assertions are exact.
fn unique_username(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

// ---------------------------------------------------------------------------
// Test: a successful submit persists the trimmed record with visited=false
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGO_URL)"]
async fn submit_persists_trimmed_record_with_visited_false() {
    let (app, submissions) = build_live_app().await;
    let username = unique_username("alice");

    let body = format!(r#"{{"username": "  {username}  ", "phone_number": " 123 "}}"#);
    let response = post_json(app, "/submit", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert!(json.get("message").is_none());

    let stored = submissions
        .find_one(doc! { "username": &username })
        .await
        .unwrap()
        .expect("submission should have been persisted");

    assert_eq!(stored.username, username);
    assert_eq!(stored.phone_number, "123");
    assert!(!stored.visited);
}

// ---------------------------------------------------------------------------
// Test: duplicate submissions create two distinct records
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGO_URL)"]
async fn duplicate_submissions_create_two_records() {
    let (app, submissions) = build_live_app().await;
    let username = unique_username("bob");

    let body = format!(r#"{{"username": "{username}", "phone_number": "555"}}"#);
    for _ in 0..2 {
        let response = post_json(app.clone(), "/submit", &body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count = submissions
        .count_documents(doc! { "username": &username })
        .await
        .unwrap();
    assert_eq!(count, 2, "identical submissions must not be deduplicated");
}

// ---------------------------------------------------------------------------
// Test: /check_mongo succeeds against a reachable store
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a running MongoDB (set MONGO_URL)"]
async fn check_mongo_returns_success_when_reachable() {
    let (app, _) = build_live_app().await;
    let response = common::get(app, "/check_mongo").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Connected to MongoDB successfully.");
}

//! Integration tests for the dashboard service.
//!
//! These drive the full router with a mock counter store; no Redis
//! instance is required.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use stackdash::api::{create_router, AppState};
use stackdash::config::Config;
use stackdash::store::{MockConfig, MockStore};

fn state_with(store: MockStore) -> AppState {
    AppState::new(Arc::new(store), Arc::new(Config::default()))
}

async fn fetch_index(state: &AppState) -> (StatusCode, String) {
    let app = create_router(state.clone());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn extract_visit_count(body: &str) -> i64 {
    let marker = "Total Visits: ";
    let start = body.find(marker).expect("visit count missing") + marker.len();
    let rest = &body[start..];
    let end = rest.find('<').unwrap_or(rest.len());
    rest[..end].trim().parse().expect("visit count not a number")
}

#[tokio::test]
async fn successful_request_renders_full_dashboard() {
    let state = state_with(MockStore::new());

    let (status, body) = fetch_index(&state).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Connected"));
    assert!(body.contains("Total Visits: 1"));
    assert!(body.contains("Hostname:"));
    assert!(body.contains("Timezone:"));
}

#[tokio::test]
async fn visit_counts_increase_strictly_across_requests() {
    let state = state_with(MockStore::new());

    let mut previous = 0;
    for _ in 0..5 {
        let (status, body) = fetch_index(&state).await;
        assert_eq!(status, StatusCode::OK);

        let count = extract_visit_count(&body);
        assert!(count > previous, "count {count} not above {previous}");
        previous = count;
    }
}

#[tokio::test]
async fn repeated_requests_are_not_cached() {
    let state = state_with(MockStore::new());

    let (_, first) = fetch_index(&state).await;
    let (_, second) = fetch_index(&state).await;

    assert_ne!(
        extract_visit_count(&first),
        extract_visit_count(&second),
        "two identical requests returned the same counter value"
    );
}

#[tokio::test]
async fn unreachable_store_yields_plain_error() {
    let state = state_with(MockStore::with_config(MockConfig {
        fail_increment: true,
        fail_ping: true,
        ..Default::default()
    }));

    let (status, body) = fetch_index(&state).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error:"), "body was: {body}");
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("stats-grid"));
}

#[tokio::test]
async fn unhealthy_ping_shows_disconnected_but_still_counts() {
    let state = state_with(MockStore::with_config(MockConfig {
        ping_result: false,
        ..Default::default()
    }));

    let (status, body) = fetch_index(&state).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Disconnected"));
    assert_eq!(extract_visit_count(&body), 1);

    // And the counter keeps moving on the next request.
    let (_, body) = fetch_index(&state).await;
    assert_eq!(extract_visit_count(&body), 2);
}

#[tokio::test]
async fn failed_request_still_increments_the_counter() {
    let store = MockStore::with_config(MockConfig {
        fail_ping: true,
        ..Default::default()
    });
    let probe = store.clone();
    let state = state_with(store);

    let (status, _) = fetch_index(&state).await;

    // The increment ran before the ping failed.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(probe.current(), 1);
}

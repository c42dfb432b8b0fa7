//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use storyline_api::routes;
use storyline_api::state::AppState;
use storyline_api::token::TokenSigner;
use storyline_core::clock::SystemClock;
use storyline_core::directory::PlayerDirectory;
use storyline_core::player::SessionUser;
use storyline_core::repository::{AboutMeRepository, StoryRepository};

/// HS256 secret shared by every integration test.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Signer matching the test app's configuration.
pub fn signer() -> TokenSigner {
    TokenSigner::new(TEST_SECRET, 30)
}

/// Issues a valid bearer header value for the given identity.
pub fn bearer_for(sub: i64, name: &str) -> String {
    let user = SessionUser {
        sub,
        name: name.to_string(),
    };
    let token = signer().sign(&user, Utc::now()).unwrap();
    format!("Bearer {token}")
}

/// Build the full app router wired to the given doubles. Uses the same
/// route structure as `main.rs`.
pub fn build_test_app(
    stories: Arc<dyn StoryRepository>,
    about_me: Arc<dyn AboutMeRepository>,
    directory: Arc<dyn PlayerDirectory>,
) -> Router {
    let app_state = AppState::new(stories, about_me, directory, Arc::new(SystemClock), signer());

    Router::new()
        .merge(routes::health::router())
        .merge(routes::authenticate::router())
        .merge(routes::profile::router())
        .merge(routes::react::router())
        .merge(routes::about::router())
        .with_state(app_state)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send an authenticated POST request with a JSON body.
pub async fn post_json_authorized(
    app: Router,
    uri: &str,
    bearer: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", bearer)
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

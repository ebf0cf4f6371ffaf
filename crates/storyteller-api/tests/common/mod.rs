//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use storyteller_core::repository::SceneRepository;
use storyteller_story_store::JsonStoryRepository;
use storyteller_test_support::{FailingSceneRepository, sample_story_bytes};
use tower::ServiceExt;

use storyteller_api::config::ServerConfig;
use storyteller_api::state::AppState;

/// Build the full app router over `scenes` with the default configuration.
/// Uses the same wiring as `main.rs`.
pub fn build_app_with(scenes: Arc<dyn SceneRepository>) -> Router {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    storyteller_api::app(AppState::new(scenes), config.cors_layer())
}

/// Build the full app router over the sample story.
pub fn build_test_app() -> Router {
    let story = JsonStoryRepository::from_slice(&sample_story_bytes()).unwrap();
    build_app_with(Arc::new(story))
}

/// Build the full app router over a repository whose lookups always fail.
pub fn build_failing_app() -> Router {
    build_app_with(Arc::new(FailingSceneRepository))
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

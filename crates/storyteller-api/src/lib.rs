//! Storyteller API — HTTP surface over a loaded story.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the application router with tracing and the given CORS policy.
#[must_use]
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::story::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

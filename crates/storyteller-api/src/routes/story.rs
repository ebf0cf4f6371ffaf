//! Routes serving the story to the game client.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};
use uuid::Uuid;

use storyteller_core::scene::SceneId;
use storyteller_story::application::query_handlers;
use storyteller_story::domain::media;
use storyteller_story::domain::views::{SceneView, StartIdView};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /start_id
#[instrument(skip_all)]
async fn get_start_id(State(state): State<AppState>) -> Json<StartIdView> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling get_start_id query");

    Json(query_handlers::get_start_id(state.scenes.as_ref()))
}

/// GET /scene/{scene_id}
#[instrument(skip_all, fields(scene_id = scene_id))]
async fn get_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<SceneId>,
) -> Result<Json<SceneView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling get_scene query");

    let view = query_handlers::get_scene_by_id(scene_id, state.scenes.as_ref()).await?;

    Ok(Json(media::resolve_media(view)))
}

/// Returns the router for the story endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start_id", get(get_start_id))
        .route("/scene/{scene_id}", get(get_scene))
}

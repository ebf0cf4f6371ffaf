//! Query handlers for the story context.
//!
//! These read from a `SceneRepository` and return view DTOs. Media paths are
//! left as stored; callers that serve the game client apply
//! [`resolve_media`](crate::domain::media::resolve_media).

use storyteller_core::error::DomainError;
use storyteller_core::repository::SceneRepository;
use storyteller_core::scene::SceneId;

use crate::domain::views::{SceneView, StartIdView};

/// Returns the scene a new game begins at.
#[must_use]
pub fn get_start_id(repo: &dyn SceneRepository) -> StartIdView {
    StartIdView {
        start_id: repo.start_id(),
    }
}

/// Retrieves a scene by id and projects it for the client.
///
/// # Errors
///
/// Returns `DomainError::SceneNotFound` if the story has no such scene.
/// Propagates any other repository error unchanged.
pub async fn get_scene_by_id(
    scene_id: SceneId,
    repo: &dyn SceneRepository,
) -> Result<SceneView, DomainError> {
    let scene = repo.get_scene(scene_id).await?;
    Ok(SceneView::from(scene))
}

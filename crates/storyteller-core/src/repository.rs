//! Scene repository abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::scene::{Scene, SceneId};

/// Read-only access to a loaded story.
#[async_trait]
pub trait SceneRepository: Send + Sync {
    /// The scene a new game begins at.
    fn start_id(&self) -> SceneId;

    /// Number of scenes available.
    fn scene_count(&self) -> usize;

    /// Content hash of the loaded story document, if known.
    fn version_hash(&self) -> Option<&str>;

    /// Look up a scene by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SceneNotFound` if no scene has the given id.
    async fn get_scene(&self, scene_id: SceneId) -> Result<Scene, DomainError>;
}

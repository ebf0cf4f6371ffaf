//! Test repositories — mock `SceneRepository` implementations for tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use storyteller_core::error::DomainError;
use storyteller_core::repository::SceneRepository;
use storyteller_core::scene::{Scene, SceneId};

/// A repository serving a fixed set of scenes built in code.
#[derive(Debug)]
pub struct StaticSceneRepository {
    start_id: SceneId,
    scenes: BTreeMap<SceneId, Scene>,
}

impl StaticSceneRepository {
    /// Create a repository that starts at `start_id` and serves `scenes`.
    #[must_use]
    pub fn new(start_id: SceneId, scenes: Vec<Scene>) -> Self {
        Self {
            start_id,
            scenes: scenes.into_iter().map(|scene| (scene.id, scene)).collect(),
        }
    }
}

#[async_trait]
impl SceneRepository for StaticSceneRepository {
    fn start_id(&self) -> SceneId {
        self.start_id
    }

    fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    fn version_hash(&self) -> Option<&str> {
        None
    }

    async fn get_scene(&self, scene_id: SceneId) -> Result<Scene, DomainError> {
        self.scenes
            .get(&scene_id)
            .cloned()
            .ok_or(DomainError::SceneNotFound(scene_id))
    }
}

/// A repository whose lookups always fail with an infrastructure error.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSceneRepository;

#[async_trait]
impl SceneRepository for FailingSceneRepository {
    fn start_id(&self) -> SceneId {
        1
    }

    fn scene_count(&self) -> usize {
        0
    }

    fn version_hash(&self) -> Option<&str> {
        None
    }

    async fn get_scene(&self, _scene_id: SceneId) -> Result<Scene, DomainError> {
        Err(DomainError::Infrastructure("story index unavailable".into()))
    }
}

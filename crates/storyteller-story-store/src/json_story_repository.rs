//! JSON-file implementation of the `SceneRepository` trait.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use serde_json::error::Category;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use storyteller_core::error::DomainError;
use storyteller_core::repository::SceneRepository;
use storyteller_core::scene::{Scene, SceneId, Story};

use crate::error::LoadError;

/// Label used in errors for documents that were not read from disk.
const IN_MEMORY_SOURCE: &str = "<in-memory>";

/// Immutable, id-keyed index over a story document.
#[derive(Debug, Clone)]
pub struct JsonStoryRepository {
    start_id: SceneId,
    scenes: HashMap<SceneId, Scene>,
    version_hash: String,
}

impl JsonStoryRepository {
    /// Reads and indexes the story document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::DataNotFound` if the file does not exist,
    /// `LoadError::DataParse` if it is not valid JSON, and
    /// `LoadError::LoadFailure` for any other read or shape problem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::DataNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::LoadFailure {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;
        Self::parse(path, &bytes)
    }

    /// Indexes a story document held in memory.
    ///
    /// # Errors
    ///
    /// Same as [`JsonStoryRepository::load`], minus `DataNotFound`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::parse(Path::new(IN_MEMORY_SOURCE), bytes)
    }

    fn parse(path: &Path, bytes: &[u8]) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_slice(bytes).map_err(|err| match err.classify() {
            Category::Syntax | Category::Eof => LoadError::DataParse {
                path: path.to_path_buf(),
                source: err,
            },
            Category::Data | Category::Io => LoadError::LoadFailure {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;

        // Derived visitors also accept sequences, so objects are enforced here.
        check_shape(&document).map_err(|reason| LoadError::LoadFailure {
            path: path.to_path_buf(),
            reason,
        })?;

        let story: Story =
            serde_json::from_value(document).map_err(|err| LoadError::LoadFailure {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;

        let version_hash = compute_hash(bytes);
        let repository = Self::index(path, story, version_hash)?;

        info!(
            source = %path.display(),
            start_id = repository.start_id,
            scene_count = repository.scenes.len(),
            version_hash = %repository.version_hash,
            "story loaded"
        );
        if !repository.scenes.contains_key(&repository.start_id) {
            warn!(
                start_id = repository.start_id,
                "start scene is not present in the story"
            );
        }

        Ok(repository)
    }

    fn index(path: &Path, story: Story, version_hash: String) -> Result<Self, LoadError> {
        let mut scenes = HashMap::with_capacity(story.scenes.len());
        for scene in story.scenes {
            match scenes.entry(scene.id) {
                Entry::Occupied(entry) => {
                    return Err(LoadError::LoadFailure {
                        path: PathBuf::from(path),
                        reason: format!("duplicate scene id {}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(scene);
                }
            }
        }

        Ok(Self {
            start_id: story.start_id,
            scenes,
            version_hash,
        })
    }

    /// All scene ids, in ascending order.
    #[must_use]
    pub fn scene_ids(&self) -> Vec<SceneId> {
        let mut ids: Vec<SceneId> = self.scenes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Requires the document, each scene and each trigger to be JSON objects.
fn check_shape(document: &Value) -> Result<(), String> {
    let Some(story) = document.as_object() else {
        return Err("story document must be a JSON object".to_owned());
    };
    let Some(scenes) = story.get("scenes").and_then(Value::as_array) else {
        return Ok(());
    };
    for (index, scene) in scenes.iter().enumerate() {
        let Some(scene) = scene.as_object() else {
            return Err(format!("scene at index {index} must be a JSON object"));
        };
        let Some(triggers) = scene.get("triggers").and_then(Value::as_array) else {
            continue;
        };
        if let Some(position) = triggers.iter().position(|trigger| !trigger.is_object()) {
            return Err(format!(
                "trigger at index {position} of scene at index {index} must be a JSON object"
            ));
        }
    }
    Ok(())
}

/// SHA-256 of the raw document, hex encoded.
fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl SceneRepository for JsonStoryRepository {
    fn start_id(&self) -> SceneId {
        self.start_id
    }

    fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    fn version_hash(&self) -> Option<&str> {
        Some(&self.version_hash)
    }

    async fn get_scene(&self, scene_id: SceneId) -> Result<Scene, DomainError> {
        self.scenes
            .get(&scene_id)
            .cloned()
            .ok_or(DomainError::SceneNotFound(scene_id))
    }
}

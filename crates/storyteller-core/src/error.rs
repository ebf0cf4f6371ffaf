//! Domain error types.

use thiserror::Error;

use crate::scene::SceneId;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No scene with the requested id exists in the loaded story.
    #[error("scene not found: {0}")]
    SceneNotFound(SceneId),

    /// An infrastructure error behind the repository.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

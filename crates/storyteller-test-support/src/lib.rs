//! Shared test fixtures and mocks for the Storyteller interactive fiction
//! server.

mod fixtures;
mod repository;

pub use fixtures::{sample_story, sample_story_bytes};
pub use repository::{FailingSceneRepository, StaticSceneRepository};

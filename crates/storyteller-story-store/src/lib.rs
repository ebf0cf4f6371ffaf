//! Storyteller Story Store — loads the story document into an immutable,
//! id-keyed in-memory index.

pub mod error;
pub mod json_story_repository;

pub use error::LoadError;
pub use json_story_repository::JsonStoryRepository;

//! Shared application state.

use std::sync::Arc;

use storyteller_core::repository::SceneRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded story. Read-only for the life of the process.
    pub scenes: Arc<dyn SceneRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(scenes: Arc<dyn SceneRepository>) -> Self {
        Self { scenes }
    }
}

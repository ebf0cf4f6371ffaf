//! Errors raised while loading a story document.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a story document. All variants are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The story document does not exist.
    #[error("story document not found: {}", path.display())]
    DataNotFound {
        /// Path that was read.
        path: PathBuf,
    },

    /// The story document is not valid JSON.
    #[error("story document {} is not valid JSON: {source}", path.display())]
    DataParse {
        /// Path that was read.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O or shape problem.
    #[error("failed to load story document {}: {reason}", path.display())]
    LoadFailure {
        /// Path that was read.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

use std::{io, path::PathBuf};

/// Errors that can occur during settings operations.
///
/// Missing or malformed settings content is never an error; only the
/// filesystem refusing a create or a write surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required file or directory could not be created or read at startup
    #[error("failed to prepare '{path}': {source}")]
    SetupError {
        /// Path that could not be prepared
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// Error occurred while persisting settings to disk
    #[error("failed to persist settings to '{path}': {source}")]
    PersistenceError {
        /// Path where persistence failed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },
}

use thiserror::Error;

use crate::config_store::ConfigError;

/// Errors that stop the loader before any command can run.
///
/// Failures inside a command are reported through its result instead.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Settings could not be prepared.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LoaderError>;

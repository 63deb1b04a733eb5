//! User script plugins.
//!
//! Plugins are enumerated and toggled through the [`PluginRegistry`] seam;
//! [`PluginDirectory`] is the filesystem-backed registry the loader ships
//! with. Identifier lookup lives in [`resolver`].

mod directory;
pub mod resolver;

#[cfg(test)]
mod tests;

use std::{io, path::PathBuf};

pub use directory::PluginDirectory;
pub use resolver::{normalize, resolve};

/// A plugin as reported by a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    /// Path-like identifier relative to the plugins directory, `/`-separated.
    pub name: String,
    /// Whether the client will load this plugin.
    pub enabled: bool,
    /// Author declared by the plugin, if any.
    pub author: Option<String>,
    /// Homepage declared by the plugin, if any.
    pub link: Option<String>,
}

impl PluginInfo {
    /// Creates a plugin entry without author or link metadata.
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
            author: None,
            link: None,
        }
    }
}

/// Errors raised by plugin registries.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The plugins directory could not be read.
    #[error("failed to read plugins from '{path}': {source}")]
    ReadFailed {
        /// Directory being enumerated
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The plugin vanished between enumeration and toggle.
    #[error("plugin '{0}' no longer exists")]
    Missing(String),

    /// Another file already occupies the toggled name.
    #[error("cannot toggle '{name}': '{conflict}' already exists")]
    Conflict {
        /// Plugin being toggled
        name: String,
        /// Entry blocking the rename
        conflict: String,
    },

    /// The rename itself failed.
    #[error("failed to toggle '{name}': {source}")]
    ToggleFailed {
        /// Plugin being toggled
        name: String,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },
}

/// Source of installed plugins.
///
/// Enumeration order is significant: identifier resolution returns the first
/// plugin that matches.
pub trait PluginRegistry: Send + Sync {
    /// Lists every installed plugin.
    ///
    /// # Errors
    /// Returns `PluginError::ReadFailed` if the backing store cannot be read.
    fn all(&self) -> Result<Vec<PluginInfo>, PluginError>;

    /// Flips the enabled state of `plugin` and returns its new description.
    ///
    /// # Errors
    /// Returns `PluginError` if the plugin is gone or cannot be changed.
    fn toggle(&self, plugin: &PluginInfo) -> Result<PluginInfo, PluginError>;
}

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{info, instrument, warn};

use crate::config_store::ConfigStore;

use super::client::client_ux_running;

/// File name the core module is placed under inside the client directory.
const HOOK_FILE: &str = "d3d9.dll";

/// Errors raised while changing the module's activation state.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The core module is not present beside the loader.
    #[error("core module not found at '{0}'")]
    NotFound(PathBuf),

    /// No client installation path is configured.
    #[error("League path is not set")]
    LeaguePathNotSet,

    /// The hook file could not be placed or removed.
    #[error("failed to update '{path}': {source}")]
    Io {
        /// Hook file being changed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },
}

/// Activation capability of the native core module.
pub trait ModuleControl: Send + Sync {
    /// Whether the module binary exists beside the loader.
    fn is_found(&self) -> bool;

    /// Whether the module is currently loaded into a live client.
    fn is_loaded(&self) -> bool;

    /// Whether the module is activated for the next client start.
    fn is_active(&self) -> bool;

    /// Activates or deactivates the module.
    ///
    /// # Errors
    /// Returns `ModuleError` if the activation state could not be changed.
    fn set_active(&self, active: bool) -> Result<(), ModuleError>;
}

/// Activates `core.dll` by placing it as a hook file in the client directory
///
/// The hook is a symlink when `UseSymlink` is set and a plain copy
/// otherwise. The client directory is read from the store at call time so
/// a freshly set path takes effect immediately.
#[derive(Debug, Clone)]
pub struct CoreModule {
    core_path: PathBuf,
    store: Arc<ConfigStore>,
}

impl CoreModule {
    /// Creates the module handle for the binary at `core_path`.
    pub fn new(core_path: impl Into<PathBuf>, store: Arc<ConfigStore>) -> Self {
        Self {
            core_path: core_path.into(),
            store,
        }
    }

    fn hook_path(&self) -> Option<PathBuf> {
        let league_path = self.store.league_path();
        let league_path = league_path.trim();
        if league_path.is_empty() {
            return None;
        }

        Some(Path::new(league_path).join(HOOK_FILE))
    }

    fn install(&self, hook: &Path) -> io::Result<()> {
        remove_hook(hook)?;

        if self.store.use_symlink() {
            link(&self.core_path, hook)
        } else {
            fs::copy(&self.core_path, hook).map(drop)
        }
    }
}

impl ModuleControl for CoreModule {
    fn is_found(&self) -> bool {
        self.core_path.is_file()
    }

    fn is_loaded(&self) -> bool {
        self.is_active() && client_ux_running()
    }

    fn is_active(&self) -> bool {
        self.hook_path()
            .is_some_and(|hook| fs::symlink_metadata(hook).is_ok())
    }

    #[instrument(skip(self))]
    fn set_active(&self, active: bool) -> Result<(), ModuleError> {
        if !self.is_found() {
            return Err(ModuleError::NotFound(self.core_path.clone()));
        }

        let hook = self.hook_path().ok_or(ModuleError::LeaguePathNotSet)?;

        let result = if active {
            self.install(&hook)
        } else {
            remove_hook(&hook)
        };

        result.map_err(|source| {
            warn!(hook = %hook.display(), error = %source, "Failed to update hook file");
            ModuleError::Io {
                path: hook.clone(),
                source,
            }
        })?;

        info!(hook = %hook.display(), active, "Updated core module activation");
        Ok(())
    }
}

fn remove_hook(hook: &Path) -> io::Result<()> {
    match fs::remove_file(hook) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn link(original: &Path, hook: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, hook)
}

#[cfg(windows)]
fn link(original: &Path, hook: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(original, hook)
}

#[cfg(not(any(unix, windows)))]
fn link(original: &Path, hook: &Path) -> io::Result<()> {
    fs::copy(original, hook).map(drop)
}

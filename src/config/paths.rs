use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// Environment variable that relocates every loader file away from the
/// executable's directory.
pub const HOME_ENV: &str = "ROSE_LOADER_HOME";

/// Utility struct for locating the loader's on-disk files
///
/// Everything lives beside the executable: the settings file, the auxiliary
/// data store, the plugins directory, the native core module and the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Creates paths rooted at an explicit base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves the base directory for this process
    ///
    /// - First checks `ROSE_LOADER_HOME`
    /// - Falls back to the directory containing the running executable
    ///
    /// # Errors
    /// Returns an error if the executable path cannot be determined
    pub fn discover() -> Result<Self, Error> {
        if let Ok(home) = env::var(HOME_ENV) {
            if !home.trim().is_empty() {
                return Ok(Self::new(home));
            }
        }

        let exe = env::current_exe()?;
        let base_dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                "Executable path has no parent directory",
            )
        })?;

        Ok(Self::new(base_dir))
    }

    /// Directory every other path is resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Settings file of newline-separated `key=value` pairs.
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config")
    }

    /// Auxiliary data-store file owned by the client-side runtime.
    pub fn data_store_file(&self) -> PathBuf {
        self.base_dir.join("datastore")
    }

    /// Directory scanned for user plugins.
    pub fn plugins_dir(&self) -> PathBuf {
        self.base_dir.join("plugins")
    }

    /// Native core module activated next to the client.
    pub fn core_module(&self) -> PathBuf {
        self.base_dir.join("core.dll")
    }

    /// Get the log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir(&self) -> Result<PathBuf, Error> {
        let log_dir = self.base_dir.join("logs");

        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Location of the Rose application's own `config.ini`, if the platform
    /// has a local application data directory.
    pub fn rose_config() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("Rose").join("config.ini"))
    }
}

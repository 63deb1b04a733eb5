use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::RwLock,
};

use indexmap::IndexMap;
use tracing::{debug, info, instrument};

use crate::config::{ConfigPaths, rose};

use super::{
    ConfigError,
    parsing::{parse_settings, parse_stored_bool, render_settings},
};

const LEAGUE_PATH: &str = "LeaguePath";
const USE_SYMLINK: &str = "UseSymlink";
const LANGUAGE: &str = "Language";
const OPTIMIZE_CLIENT: &str = "OptimizeClient";
const SUPER_LOW_SPEC_MODE: &str = "SuperLowSpecMode";

/// Settings store backed by the `config` file beside the loader
///
/// Holds the whole file in memory as an ordered string map. Every mutation
/// rewrites the file before returning, so a later process always observes
/// the latest value.
#[derive(Debug)]
pub struct ConfigStore {
    settings_file: PathBuf,
    rose_config: Option<PathBuf>,
    data: RwLock<IndexMap<String, String>>,
}

impl ConfigStore {
    /// Loads the store, creating the plugins directory, the settings file and
    /// the data-store file when they are missing
    ///
    /// The external Rose ini is looked up in the platform's local
    /// application data directory.
    ///
    /// # Errors
    /// * `ConfigError::SetupError` - If a required file or directory cannot be
    ///   created, or the settings file exists but cannot be read
    #[instrument(skip_all, fields(base = %paths.base_dir().display()))]
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        ensure_dir(&paths.plugins_dir())?;
        ensure_file(&paths.settings_file())?;
        ensure_file(&paths.data_store_file())?;

        let settings_file = paths.settings_file();
        let bytes = fs::read(&settings_file).map_err(|source| ConfigError::SetupError {
            path: settings_file.clone(),
            source,
        })?;

        // Undecodable bytes are malformed content, not an I/O failure.
        let data = parse_settings(&String::from_utf8_lossy(&bytes));
        debug!(entries = data.len(), "Loaded settings");

        Ok(Self {
            settings_file,
            rose_config: ConfigPaths::rose_config(),
            data: RwLock::new(data),
        })
    }

    /// Replaces the location of the external Rose ini; `None` disables the
    /// lookup entirely.
    pub fn with_rose_config(mut self, path: Option<PathBuf>) -> Self {
        self.rose_config = path;
        self
    }

    /// Path of the settings file this store persists to.
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Returns the stored value for `key`, or `default` when absent.
    pub fn get(&self, key: &str, default: &str) -> String {
        let data = match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        data.get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Stores `value` under `key` and rewrites the settings file
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let contents = {
            let mut data = match self.data.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };

            data.insert(key.to_string(), value.to_string());
            render_settings(&data)
        };

        fs::write(&self.settings_file, contents).map_err(|source| {
            ConfigError::PersistenceError {
                path: self.settings_file.clone(),
                source,
            }
        })?;

        info!(key, "Saved setting");
        Ok(())
    }

    /// Returns `key` as a boolean; unrecognized stored strings yield `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        parse_stored_bool(&self.get(key, "")).unwrap_or(default)
    }

    /// Stores `value` as `true`/`false`
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_bool(&self, key: &str, value: bool) -> Result<(), ConfigError> {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Client installation path
    ///
    /// A non-blank `clientpath` from the Rose ini always wins over the local
    /// `LeaguePath` entry.
    pub fn league_path(&self) -> String {
        if let Some(path) = self.rose_config.as_deref().and_then(rose::client_path) {
            debug!(%path, "Using client path from Rose config");
            return path;
        }

        self.get(LEAGUE_PATH, "")
    }

    /// Writes the local `LeaguePath` entry; the Rose ini is never touched
    ///
    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_league_path(&self, path: &str) -> Result<(), ConfigError> {
        self.set(LEAGUE_PATH, path)
    }

    /// Whether the core module is linked rather than copied on activation.
    pub fn use_symlink(&self) -> bool {
        self.get_bool(USE_SYMLINK, false)
    }

    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_use_symlink(&self, value: bool) -> Result<(), ConfigError> {
        self.set_bool(USE_SYMLINK, value)
    }

    /// UI language, `English` unless configured.
    pub fn language(&self) -> String {
        self.get(LANGUAGE, "English")
    }

    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_language(&self, value: &str) -> Result<(), ConfigError> {
        self.set(LANGUAGE, value)
    }

    /// Client optimization toggle, on by default.
    pub fn optimize_client(&self) -> bool {
        self.get_bool(OPTIMIZE_CLIENT, true)
    }

    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_optimize_client(&self, value: bool) -> Result<(), ConfigError> {
        self.set_bool(OPTIMIZE_CLIENT, value)
    }

    /// Super low spec mode toggle, off by default.
    pub fn super_low_spec_mode(&self) -> bool {
        self.get_bool(SUPER_LOW_SPEC_MODE, false)
    }

    /// # Errors
    /// * `ConfigError::PersistenceError` - If the settings file cannot be written
    pub fn set_super_low_spec_mode(&self, value: bool) -> Result<(), ConfigError> {
        self.set_bool(SUPER_LOW_SPEC_MODE, value)
    }
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        return Ok(());
    }

    info!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|source| ConfigError::SetupError {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }

    info!("Creating file: {}", path.display());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|source| ConfigError::SetupError {
            path: path.to_path_buf(),
            source,
        })
}

//! System-wide single-instance detection.
//!
//! The first loader process takes an exclusive lock on a well-known file in
//! the temp directory and holds it until exit. Later processes see the lock
//! taken and know they are not alone.

use std::{
    env,
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use fs2::FileExt;
use tracing::{debug, warn};

const LOCK_NAME: &str = "989d2110-46da-4c8d-84c1-c4a42e43c424.lock";

/// Exclusive lock held for the lifetime of the process.
///
/// The lock is released when the value is dropped.
#[derive(Debug)]
pub struct InstanceLock {
    file: Option<File>,
}

impl InstanceLock {
    /// Default lock file location.
    pub fn default_path() -> PathBuf {
        env::temp_dir().join(LOCK_NAME)
    }

    /// Tries to become the sole loader instance using the lock at `path`.
    ///
    /// Never blocks. If the lock file cannot even be opened the process is
    /// treated as not being the sole instance.
    pub fn acquire(path: &Path) -> Self {
        let file = match OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot open instance lock");
                return Self { file: None };
            }
        };

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!(path = %path.display(), "Acquired instance lock");
                Self { file: Some(file) }
            }
            Err(e) => {
                debug!(
                    path = %path.display(),
                    error = %e,
                    "Another loader instance holds the lock"
                );
                Self { file: None }
            }
        }
    }

    /// Whether this process is the only running loader.
    pub fn is_sole_instance(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = FileExt::unlock(file);
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use chat_auth_application::error::{AppError, AppResult};

/// A single JSON document on disk. Writes go through a temporary sibling and
/// a rename, one at a time.
pub struct JsonSnapshot {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// A missing or blank file reads as `T::default()`.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load<T: DeserializeOwned + Default>(&self) -> AppResult<T> {
        if !self.path.exists() {
            return Ok(T::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(T::default());
        }

        debug!(bytes = raw.len(), "Snapshot read");
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builds the value under the write lock so concurrent writers land in
    /// the order they observed the data.
    pub fn write_with<T, F>(&self, build: F) -> AppResult<()>
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        let _guard = self.write_lock.lock().map_err(|_| AppError::TaskError {
            message: format!("write lock for {} poisoned", self.path.display()),
        })?;
        let value = build();
        Self::write_atomically(&self.path, &serde_json::to_vec_pretty(&value)?)
    }

    fn write_atomically(path: &Path, bytes: &[u8]) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

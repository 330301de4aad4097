use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Local key-value store: one `<key>.json` file per key under a data
/// directory.
///
/// The public `get`/`set`/`remove`/`clear` surface never errors: reads
/// substitute the caller's default, writes and deletes are best-effort
/// and log on failure. The fallible `try_*` variants are exposed for
/// callers that want to observe failures directly.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open the store at the platform data directory.
    pub fn open() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Self::with_dir(base.join("lernio"))
    }

    /// Open the store at an explicit directory. Used by tests and by
    /// hosts that manage their own profile location.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read and deserialize `key`, or return `default` when the key is
    /// missing or its contents do not parse. Never errors.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                debug!(key, error = %e, "falling back to default value");
                default
            }
        }
    }

    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let contents = std::fs::read_to_string(self.path_for(key))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Serialize and write `value` under `key`. Best-effort: failures
    /// (e.g. disk full) are logged and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            warn!(key, error = %e, "failed to persist value");
        }
    }

    pub fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        // Write to a temp file then rename for atomicity
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Delete `key` if present. Best-effort.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists()
            && let Err(e) = std::fs::remove_file(&path)
        {
            warn!(key, error = %e, "failed to remove key");
        }
    }

    /// Delete every key in the store. Best-effort.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!(error = %e, "failed to clear store");
        }
    }

    fn try_clear(&self) -> Result<(), StoreError> {
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                std::fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

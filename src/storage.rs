//! Keyed settings persistence.
//!
//! Settings are stored as JSON strings under fixed keys. Two backends are
//! provided: [`MemoryStorage`] for tests and sessions without a writable data
//! directory, and [`JsonFileStorage`] which keeps one `<key>.json` file per key
//! inside a directory.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode setting '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store, modelled on `eframe::Storage` but with fallible writes.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`. `Ok(None)` means the key was never written.
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Serialises `value` as JSON and stores it under `key`.
pub fn save_setting<T>(storage: &mut dyn KeyValueStorage, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
{
    let json_str = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set_string(key, json_str)
}

/// Volatile storage backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed storage: each key maps to `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &target).map_err(io_err)?;
        log::debug!("Wrote setting '{}' to {}", key, target.display());
        Ok(())
    }
}

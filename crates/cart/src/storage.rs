//! Durable key-value snapshot storage.
//!
//! The cart persists a single serialized value per key - the full line-item
//! sequence replaces the previous snapshot on every write, there are no
//! partial updates. Two implementations ship: [`MemoryStore`] for tests and
//! ephemeral carts, [`FileStore`] for hosts that survive restarts.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value as JsonValue;

use crate::error::StorageError;

/// A durable key-value facility holding one JSON value per key.
pub trait SnapshotStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read or the stored
    /// bytes are not valid JSON.
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError>;

    /// Store `value` under `key`, replacing any previous value entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &JsonValue) -> Result<(), StorageError>;
}

/// In-memory snapshot store.
///
/// The default for tests and for hosts that do not need carts to survive the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, JsonValue>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &JsonValue) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// File-backed snapshot store: one JSON file per key under a data directory.
///
/// This is the persistent-local-storage analog for command-line and desktop
/// hosts. Keys map to `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        let raw = match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn set(&mut self, key: &str, value: &JsonValue) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(value)?;
        fs::write(self.path_for(key), serialized)?;
        Ok(())
    }
}

//! Persisted editor state in a key/value store.
//!
//! Devices, rooms and groups live under separate keys as JSON arrays. A key
//! is only written while its collection is non-empty, and all three are read
//! eagerly at startup. A key that cannot be read or parsed is logged and
//! treated as empty so one bad entry does not lose the others.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::doc::Document;
use crate::io::DocumentFile;

pub const DEVICES_KEY: &str = "smart-home-devices";
pub const ROOMS_KEY: &str = "smart-home-rooms";
pub const GROUPS_KEY: &str = "smart-home-device-groups";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed, string-valued persistent storage.
pub trait KeyValueStore {
    /// The value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Backend failures other than absence.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Backend write failures.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-process store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Write each non-empty collection of `doc` under its key.
///
/// # Errors
///
/// The first backend failure; keys before it have already been written.
pub fn save_document(store: &mut dyn KeyValueStore, doc: &Document) -> Result<(), StoreError> {
    let file = DocumentFile::from_document(doc);
    save_list(store, DEVICES_KEY, &file.devices)?;
    save_list(store, ROOMS_KEY, &file.rooms)?;
    save_list(store, GROUPS_KEY, &file.device_groups)?;
    Ok(())
}

/// Read all three keys and assemble a document.
///
/// Missing or unreadable keys count as empty. If the pieces do not form a
/// consistent document the result is empty.
#[must_use]
pub fn load_document(store: &dyn KeyValueStore) -> Document {
    let file = DocumentFile {
        rooms: load_list(store, ROOMS_KEY),
        devices: load_list(store, DEVICES_KEY),
        device_groups: load_list(store, GROUPS_KEY),
    };
    match file.into_document() {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, "persisted state is inconsistent; starting empty");
            Document::new()
        }
    }
}

fn save_list<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, items: &[T]) -> Result<(), StoreError> {
    if items.is_empty() {
        debug!(key, "skipping empty collection");
        return Ok(());
    }
    store.set(key, serde_json::to_string(items)?)
}

fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted key");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "failed to parse persisted key");
            Vec::new()
        }
    }
}

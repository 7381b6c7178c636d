//! Key/value storage for persisted client state.
//!
//! Plays the role browser local storage plays for a web front-end: a flat
//! map of string keys to string values that survives restarts.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use dashmap::DashMap;

/// Errors from a storage backend.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corrupt state file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A flat string map. Writes are synchronous and visible to the next read.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Thread-safe in-memory store. Nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    store: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.store.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is read once on open and rewritten in full after every
/// mutation. A missing file is an empty store.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        tracing::debug!("Loaded {} keys from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let text = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}

/// Store whose writes always fail, for exercising error paths.
#[cfg(test)]
pub(crate) struct ReadOnlyStore {
    inner: MemoryStore,
}

#[cfg(test)]
impl ReadOnlyStore {
    pub(crate) fn with_entries(entries: &[(&str, &str)]) -> Self {
        let inner = MemoryStore::new();
        for (key, value) in entries {
            inner.store.insert(key.to_string(), value.to_string());
        }
        Self { inner }
    }

    fn denied() -> StorageError {
        StorageError::Io {
            path: PathBuf::from("state.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::denied())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::denied())
    }
}

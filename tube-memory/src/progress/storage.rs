//! Durable key-value storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Errors from a key-value store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("storage I/O error for {key}: {message}")]
    Io { key: String, message: String },

    /// The store is full
    #[error("storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },

    /// No store is available (e.g. disabled in the browser)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value storage, in the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    /// Stored value, `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key` = `value`.
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one `{key}.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    /// Creates the directory if it doesn't exist.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_error = |e: std::io::Error| StorageError::Io {
            key: key.to_string(),
            message: e.to_string(),
        };

        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(io_error)?;
        }
        std::fs::write(self.path(key), value).map_err(io_error)
    }
}

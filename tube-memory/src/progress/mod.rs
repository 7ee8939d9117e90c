//! Progress persistence.

mod storage;
mod store;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{DEFAULT_STORAGE_KEY, ProgressError, ProgressStore};

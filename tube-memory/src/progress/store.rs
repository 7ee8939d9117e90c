//! Saving and restoring discovered stations.

use serde_json::Value;
use tracing::{debug, warn};

use crate::discovery::DiscoverySet;

use super::storage::{KeyValueStore, StorageError};

/// Storage key progress is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "foundStations";

/// Errors writing progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Discovered station names as a JSON array under one storage key.
#[derive(Debug, Clone)]
pub struct ProgressStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Store using [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write every discovered name, in discovery order.
    pub fn persist(&mut self, discovered: &DiscoverySet) -> Result<(), ProgressError> {
        let json = serde_json::to_string(discovered.names())?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = discovered.len(), "persisted progress");
        Ok(())
    }

    /// Saved names, in saved order.
    ///
    /// Anything missing or unreadable counts as no progress. Entries that
    /// aren't strings are skipped. Duplicates are returned as stored.
    pub fn restore(&self) -> Vec<String> {
        let Some(raw) = self.storage.get(&self.key) else {
            return Vec::new();
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
            Ok(other) => {
                warn!(key = %self.key, kind = json_kind(&other), "saved progress is not a list, ignoring");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "saved progress is not valid JSON, ignoring");
                Vec::new()
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{FileStore, MemoryStore};
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn persists_json_array_in_order() {
        let mut store = ProgressStore::new(MemoryStore::new());
        let set: DiscoverySet = ["Bank", "Oxford Circus"].into_iter().collect();

        store.persist(&set).unwrap();
        assert_eq!(
            store.storage().get("foundStations").as_deref(),
            Some(r#"["Bank","Oxford Circus"]"#)
        );
    }

    #[test]
    fn missing_means_empty() {
        let store = ProgressStore::new(MemoryStore::new());
        assert!(store.restore().is_empty());
    }

    #[test]
    fn unparseable_means_empty() {
        for raw in ["not json", "{\"a\":1}", "42", "null", ""] {
            let store = ProgressStore::new(MemoryStore::with("foundStations", raw));
            assert!(store.restore().is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn skips_non_string_entries() {
        let store = ProgressStore::new(MemoryStore::with("foundStations", r#"["Bank", 3, null, "Euston"]"#));
        assert_eq!(store.restore(), ["Bank", "Euston"]);
    }

    #[test]
    fn duplicates_returned_as_stored() {
        let store = ProgressStore::new(MemoryStore::with("foundStations", r#"["Bank","Bank"]"#));
        assert_eq!(store.restore(), ["Bank", "Bank"]);
    }

    #[test]
    fn custom_key() {
        let mut store = ProgressStore::with_key(MemoryStore::new(), "other");
        store.persist(&["Bank"].into_iter().collect()).unwrap();
        assert_eq!(store.key(), "other");
        assert!(store.storage().get("foundStations").is_none());
        assert_eq!(store.restore(), ["Bank"]);
    }

    #[test]
    fn survives_reopen_on_disk() {
        let temp = TempDir::new().unwrap();
        let set: DiscoverySet = ["Brixton", "Green Park"].into_iter().collect();

        ProgressStore::new(FileStore::new(temp.path())).persist(&set).unwrap();

        let reopened = ProgressStore::new(FileStore::new(temp.path()));
        assert_eq!(reopened.restore(), ["Brixton", "Green Park"]);
    }

    proptest! {
        #[test]
        fn restore_inverts_persist(names in prop::collection::vec("[A-Za-z][A-Za-z '&.-]{0,24}", 0..20)) {
            let set: DiscoverySet = names.iter().map(String::as_str).collect();
            let mut store = ProgressStore::new(MemoryStore::new());
            store.persist(&set).unwrap();

            let restored: DiscoverySet = store.restore().iter().map(String::as_str).collect();
            prop_assert_eq!(restored, set);
        }
    }
}

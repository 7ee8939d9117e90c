//! [`KeyValueStore`] over the browser's `localStorage`.

use tube_memory::progress::{KeyValueStore, StorageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

/// The page's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

/// Whether a thrown value is a quota error.
fn is_quota_exceeded(err: &JsValue) -> bool {
    if let Some(exception) = err.dyn_ref::<DomException>() {
        return exception.name() == "QuotaExceededError";
    }
    format!("{err:?}").contains("QuotaExceededError")
}

impl LocalStorage {
    /// Open the window's `localStorage`.
    ///
    /// Fails when there is no window or storage is disabled.
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("localStorage error: {e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_exceeded(&e) {
                StorageError::QuotaExceeded {
                    key: key.to_string(),
                }
            } else {
                StorageError::Io {
                    key: key.to_string(),
                    message: format!("{e:?}"),
                }
            }
        })
    }
}

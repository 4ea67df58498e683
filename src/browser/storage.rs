//! Key-Value Storage
//!
//! `localStorage` access behind a small trait so the cart can be tested without a browser.

use crate::error::StorageError;

/// String key-value store with localStorage semantics
pub trait KeyValueStore {
    /// Read a key; `Ok(None)` when it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a key
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub(crate) use memory::{FailingStore, MemoryStore};

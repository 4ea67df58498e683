//! Error Types
//!
//! Failures the page reports instead of panicking.

use thiserror::Error;

/// Loading `menu.json` failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuLoadError {
    /// Request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body is not a JSON array of menu items
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Cart operation rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CartError {
    #[error("Menu item not found: {0}")]
    UnknownItem(u32),
}

/// Browser key-value storage failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No window or localStorage access denied
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// setItem threw (quota, private mode)
    #[error("Storage write failed: {0}")]
    Write(String),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

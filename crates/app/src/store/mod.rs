//! Persisted Store
//!
//! A key-value store of JSON text, standing in for browser local storage.
//! Every write replaces the whole value; the last writer wins.

use mockall::automock;
use thiserror::Error;

mod file;
mod keys;
mod memory;
mod records;

pub use file::JsonFileStore;
pub use keys::StoreKey;
pub use memory::MemoryStore;
pub(crate) use records::{read_cart, read_orders, read_templates, write_cart, write_orders, write_templates};

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error")]
    Io(#[from] std::io::Error),

    #[error("failed to write value for {key}")]
    Persist {
        key: String,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("failed to encode value for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    #[error("store lock poisoned")]
    Poisoned,
}

#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

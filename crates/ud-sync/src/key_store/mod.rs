//! Key-value seam standing in for the platform's secure credential storage.

mod file_key_store;
mod memory_key_store;

pub use file_key_store::FileKeyStore;
pub use memory_key_store::MemoryKeyStore;

use crate::SessionResult;

/// Opaque string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}

use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key-value storage for serialized board blobs
///
/// The tracker keeps its whole state in one blob under a fixed key; adapters
/// never interpret the contents.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Reads the blob stored under `key`, or `None` if nothing was written
    async fn read_blob(&self, key: &str) -> Result<Option<String>>;

    /// Writes `blob` under `key`, replacing any previous value
    async fn write_blob(&self, key: &str, blob: &str) -> Result<()>;

    /// Removes the blob under `key`. Removing a missing key is not an error.
    async fn remove_blob(&self, key: &str) -> Result<()>;

    /// Checks if the backend is ready for use
    async fn is_initialized(&self) -> bool;
}

use crate::{error::Result, storage::Storage};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process storage, the equivalent of a browser's local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one blob
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), blob.into());
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn read_blob(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write_blob(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    async fn remove_blob(&self, key: &str) -> Result<()> {
        self.blobs.write().await.remove(key);
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        true
    }
}

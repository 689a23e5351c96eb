use crate::{
    error::{Result, TrackerError},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const DATA_DIR: &'static str = ".tackboard";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::DATA_DIR),
        }
    }

    fn blob_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(TrackerError::StorageError(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.root_path.join(format!("{key}.json")))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn read_blob(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.blob_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn write_blob(&self, key: &str, blob: &str) -> Result<()> {
        let file_path = self.blob_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        // Write to a sibling temp file, then rename over the target
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, blob).await?;
        fs::rename(&tmp_path, &file_path).await?;
        Ok(())
    }

    async fn remove_blob(&self, key: &str) -> Result<()> {
        let file_path = self.blob_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }
}

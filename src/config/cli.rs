use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads files relative to a base directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

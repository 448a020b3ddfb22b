use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::VideoStorage;

/// Stores uploaded videos as plain files in one local directory.
#[derive(Debug, Clone)]
pub struct LocalVideoStorage {
    root: PathBuf,
}

impl LocalVideoStorage {
    /// Creates the directory (and parents) if missing.
    pub async fn create(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl VideoStorage for LocalVideoStorage {
    async fn store(&self, file_name: &str, content: &[u8]) -> std::io::Result<String> {
        let target = self.root.join(file_name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await?;
        file.write_all(content).await?;
        file.flush().await?;
        tracing::debug!("Stored {} bytes at {}", content.len(), target.display());
        Ok(file_name.to_string())
    }

    async fn remove(&self, file_name: &str) -> std::io::Result<()> {
        fs::remove_file(self.root.join(file_name)).await
    }
}

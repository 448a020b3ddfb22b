// Driven port - storage for uploaded video bytes

use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoStorage: Send + Sync {
    /// Writes `content` under `file_name`. Fails if that name is already taken.
    async fn store(&self, file_name: &str, content: &[u8]) -> std::io::Result<String>;
    async fn remove(&self, file_name: &str) -> std::io::Result<()>;
}

use async_trait::async_trait;

use crate::domain::JobId;

#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Maps a job id to the artifact its worker produced. An entry exists only
/// once the owning job is complete, and is written exactly once.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put(&self, id: JobId, artifact: Vec<u8>) -> Result<(), ResultStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Vec<u8>>, ResultStoreError>;

    async fn flush(&self) -> Result<(), ResultStoreError>;
}

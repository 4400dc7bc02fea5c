use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::JobId;

#[derive(Default)]
pub struct InMemoryResultStore {
    artifacts: RwLock<HashMap<JobId, Vec<u8>>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put(&self, id: JobId, artifact: Vec<u8>) -> Result<(), ResultStoreError> {
        self.artifacts.write().await.insert(id, artifact);
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Vec<u8>>, ResultStoreError> {
        Ok(self.artifacts.read().await.get(&id).cloned())
    }

    async fn flush(&self) -> Result<(), ResultStoreError> {
        self.artifacts.write().await.clear();
        Ok(())
    }
}

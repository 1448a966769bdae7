use crate::{
    error::{AppError, Result},
    repositories::{Memory, MemoryPayload, MemoryRepository},
};
use std::sync::Arc;

pub struct MemoryService {
    memory_repo: Arc<dyn MemoryRepository>,
}

impl MemoryService {
    pub fn new(memory_repo: Arc<dyn MemoryRepository>) -> Self {
        Self { memory_repo }
    }

    /// Any storage failure on create collapses into the one fixed client
    /// error; the cause only goes to the log.
    pub async fn create(&self, payload: MemoryPayload) -> Result<Memory> {
        self.memory_repo.insert(payload).await.map_err(|e| {
            tracing::warn!("create failed: {}", e);
            AppError::CreateFailed
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Memory>> {
        self.memory_repo.find_all().await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Memory> {
        self.memory_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_by_id(&self, id: &str, payload: MemoryPayload) -> Result<Memory> {
        self.memory_repo
            .update_by_id(id, payload)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Deleting a missing record is still a success.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.memory_repo.delete_by_id(id).await
    }
}

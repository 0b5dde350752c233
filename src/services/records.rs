//! Record service shared by every resource type

use crate::{error::AppResult, models::Record, repository::CollectionRepository};

#[derive(Clone)]
pub struct RecordService<R> {
    repository: CollectionRepository<R>,
}

impl<R: Record> RecordService<R> {
    pub fn new(repository: CollectionRepository<R>) -> Self {
        Self { repository }
    }

    /// List all records in creation order
    pub async fn list(&self) -> Vec<R> {
        self.repository.list().await
    }

    pub async fn count(&self) -> usize {
        self.repository.count().await
    }

    /// Get record by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<R> {
        self.repository.get_by_id(id).await.inspect_err(|_| {
            tracing::debug!("{} {} not found", R::KIND, id);
        })
    }

    /// Store a new record under the next id
    pub async fn create(&self, record: R) -> R {
        let created = self.repository.create(record).await;
        tracing::info!("Created {} {}", R::KIND, created.id());
        created
    }

    /// Full update
    pub async fn replace(&self, id: i64, record: R) -> AppResult<R> {
        let updated = self.repository.replace(id, record).await?;
        tracing::info!("Replaced {} {}", R::KIND, id);
        Ok(updated)
    }

    /// Partial update
    pub async fn patch(&self, id: i64, patch: R::Patch) -> AppResult<R> {
        let updated = self.repository.patch(id, patch).await?;
        tracing::info!("Patched {} {}", R::KIND, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await?;
        tracing::info!("Deleted {} {}", R::KIND, id);
        Ok(())
    }
}

//! In-memory collection repository

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Record,
};

struct Collection<R> {
    /// Keyed by id, in insertion order
    records: IndexMap<i64, R>,
    next_id: i64,
}

/// Ordered collection of records guarded by a single read/write lock.
///
/// Cloning yields another handle on the same collection.
pub struct CollectionRepository<R> {
    inner: Arc<RwLock<Collection<R>>>,
}

impl<R> Clone for CollectionRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Record> Default for CollectionRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> CollectionRepository<R> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collection {
                records: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::KIND, id))
    }

    /// Snapshot of every record, in insertion order
    pub async fn list(&self) -> Vec<R> {
        let collection = self.inner.read().await;
        collection.records.values().cloned().collect()
    }

    /// Number of records currently stored
    pub async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Get record by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<R> {
        let collection = self.inner.read().await;
        collection
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Append a record under the next id, ignoring whatever id it carried
    pub async fn create(&self, mut record: R) -> R {
        let mut collection = self.inner.write().await;
        let id = collection.next_id;
        collection.next_id += 1;
        record.set_id(id);
        collection.records.insert(id, record.clone());
        record
    }

    /// Overwrite every caller field of a stored record
    pub async fn replace(&self, id: i64, record: R) -> AppResult<R> {
        let mut collection = self.inner.write().await;
        let stored = collection
            .records
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        stored.replace_fields(record);
        Ok(stored.clone())
    }

    /// Overwrite the fields present in `patch`
    pub async fn patch(&self, id: i64, patch: R::Patch) -> AppResult<R> {
        let mut collection = self.inner.write().await;
        let stored = collection
            .records
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        stored.apply_patch(patch);
        Ok(stored.clone())
    }

    /// Remove a record, keeping the order of the remaining ones
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut collection = self.inner.write().await;
        collection
            .records
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

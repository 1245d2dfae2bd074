use crate::models::status::StatusCheck;
use crate::store::{StatusStore, StoreError, validate_client_name};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// # In-Memory Status Store
///
/// Holds records in a `Vec` behind a `tokio::sync::RwLock`. Appends take the
/// write lock, so concurrent creates never lose writes and a listing never
/// observes a partial record. Lifetime is tied to the process; intended for
/// deployments without a database and for tests.
#[derive(Default)]
pub struct InMemoryStatusStore {
    records: RwLock<Vec<StatusCheck>>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn create(&self, client_name: &str) -> Result<StatusCheck, StoreError> {
        validate_client_name(client_name)?;
        let record = StatusCheck::new(client_name);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(self.records.read().await.clone())
    }
}

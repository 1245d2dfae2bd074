use crate::models::status::StatusCheck;
use crate::store::{StatusStore, StoreError, validate_client_name};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

/// # MongoDB Status Store
///
/// Persists records in a MongoDB collection. Each `create` is a single
/// acknowledged `insert_one`, so a record is either fully written or absent.
/// Listing is an unsorted `find`, which returns documents in natural
/// (insertion) order.
pub struct MongoStatusStore {
    collection: Collection<StatusCheck>,
}

impl MongoStatusStore {
    /// Connects to the MongoDB deployment at `uri` and binds the store to
    /// the given database and collection.
    pub async fn connect(
        uri: &str,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(db_name).collection(collection_name);
        Ok(Self { collection })
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    async fn create(&self, client_name: &str) -> Result<StatusCheck, StoreError> {
        validate_client_name(client_name)?;
        let record = StatusCheck::new(client_name);
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let records = cursor.try_collect().await?;
        Ok(records)
    }
}

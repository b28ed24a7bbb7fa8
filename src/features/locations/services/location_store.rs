use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::core::database::StoreError;
use crate::features::locations::models::{LocationDocument, LocationRecord, NewLocation};
use crate::shared::constants::LOCATIONS_COLLECTION;

/// Persistence for saved locations
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Check that the backing store is reachable
    async fn ping(&self) -> Result<(), StoreError>;

    /// Persist a location and return its generated identifier
    async fn insert(&self, location: NewLocation) -> Result<String, StoreError>;

    /// Most recent locations first, at most `limit` of them
    async fn list_recent(&self, limit: i64) -> Result<Vec<LocationRecord>, StoreError>;
}

/// MongoDB-backed location store
pub struct MongoLocationStore {
    database: Database,
    collection: Collection<LocationDocument>,
}

impl MongoLocationStore {
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<LocationDocument>(LOCATIONS_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl LocationRepository for MongoLocationStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                tracing::error!("Database ping failed: {:?}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }

    async fn insert(&self, location: NewLocation) -> Result<String, StoreError> {
        let result = self
            .collection
            .insert_one(LocationDocument::from(location))
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert location: {:?}", e);
                StoreError::from(e)
            })?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                StoreError::Operation(format!(
                    "Unexpected inserted id: {}",
                    result.inserted_id
                ))
            })
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<LocationRecord>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query locations: {:?}", e);
                StoreError::from(e)
            })?;

        let documents: Vec<LocationDocument> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to read locations cursor: {:?}", e);
            StoreError::from(e)
        })?;

        Ok(documents.into_iter().map(LocationRecord::from).collect())
    }
}

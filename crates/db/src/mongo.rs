//! MongoDB-backed [`DocumentStore`].

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::models::Counter;
use crate::{collection, DocumentStore, StoreError};

/// Production store backed by a MongoDB database.
///
/// Constructed once at startup and shared through application state for
/// the process lifetime; collection handles are cheap to create, so only
/// the typed counters handle is held directly.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    counters: Collection<Counter>,
}

impl MongoStore {
    /// Connect to `uri` and verify connectivity with a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 }).await?;
        info!(db = db_name, "Connected to MongoDB");

        let counters = db.collection::<Counter>(collection::COUNTERS);
        Ok(Self { db, counters })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingInsertId(collection.to_string()))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn next_sequence(&self, sequence: &str) -> Result<i64, StoreError> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": sequence },
                doc! { "$inc": { "sequence_value": 1 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        // Upsert plus ReturnDocument::After always yields a document; a
        // missing one means the store broke that contract, and issuing a
        // second initialization write here could hand out duplicate IDs.
        counter
            .map(|c| c.sequence_value)
            .ok_or_else(|| StoreError::CounterMissing(sequence.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

/// Errors surfaced by a [`DocumentStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A driver-level failure talking to the database.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// An insert completed without reporting an object id.
    #[error("insert into '{0}' did not return an object id")]
    MissingInsertId(String),

    /// The atomic counter update reported no document. Unreachable under
    /// upsert semantics; surfaced instead of retried so duplicate IDs can
    /// never be handed out.
    #[error("counter upsert returned no document for sequence '{0}'")]
    CounterMissing(String),
}

/// A collection-oriented document store.
///
/// Implementations must keep `next_sequence` atomic: the increment and
/// the fetch of the new value happen as one operation against the store,
/// never as a read-then-write pair in the caller.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return the store-assigned identifier.
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError>;

    /// Every document in `collection`, in store-native order, with the
    /// storage identifier stripped.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Atomically increment the named sequence and return the new value,
    /// creating the sequence at 1 if it has never been seen.
    ///
    /// Concurrent callers with the same `sequence` never observe the
    /// same value.
    async fn next_sequence(&self, sequence: &str) -> Result<i64, StoreError>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

//! In-memory [`DocumentStore`] used by tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};

use crate::{DocumentStore, StoreError};

/// Mutex-guarded store with the same observable contract as
/// [`MongoStore`](crate::mongo::MongoStore).
///
/// Documents keep their insertion order, and sequence updates happen
/// under the lock, so the increment-and-fetch is atomic with respect to
/// other callers.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    sequences: Mutex<HashMap<String, i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", Bson::ObjectId(id));

        self.collections
            .lock()
            .expect("collections lock poisoned")
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock().expect("collections lock poisoned");

        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|doc| {
                        let mut doc = doc.clone();
                        doc.remove("_id");
                        doc
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn next_sequence(&self, sequence: &str) -> Result<i64, StoreError> {
        let mut sequences = self.sequences.lock().expect("sequences lock poisoned");
        let value = sequences.entry(sequence.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bson::doc;

    use super::*;

    // -----------------------------------------------------------------
    // Test: a sequence that has never been seen starts at 1
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn first_call_for_a_new_sequence_returns_one() {
        let store = MemoryStore::new();
        assert_eq!(store.next_sequence("projects").await.unwrap(), 1);
    }

    // -----------------------------------------------------------------
    // Test: sequences with different names are independent
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn sequences_are_independent_per_name() {
        let store = MemoryStore::new();
        assert_eq!(store.next_sequence("projects").await.unwrap(), 1);
        assert_eq!(store.next_sequence("clients").await.unwrap(), 1);
        assert_eq!(store.next_sequence("projects").await.unwrap(), 2);
        assert_eq!(store.next_sequence("clients").await.unwrap(), 2);
    }

    // -----------------------------------------------------------------
    // Test: N concurrent callers receive N distinct values
    // -----------------------------------------------------------------

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_callers_receive_distinct_values() {
        const CALLERS: usize = 64;

        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::with_capacity(CALLERS);
        for _ in 0..CALLERS {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.next_sequence("projects").await.unwrap()
            }));
        }

        let mut values = Vec::with_capacity(CALLERS);
        for handle in handles {
            values.push(handle.await.unwrap());
        }

        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), CALLERS, "duplicate sequence values issued");
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&(CALLERS as i64)));
    }

    // -----------------------------------------------------------------
    // Test: find_all strips the storage identifier
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn find_all_strips_the_storage_identifier() {
        let store = MemoryStore::new();
        store
            .insert("projects", doc! { "id": 1_i64, "name": "Atrium" })
            .await
            .unwrap();

        let docs = store.find_all("projects").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert!(!docs[0].contains_key("_id"));
        assert_eq!(docs[0].get_str("name").unwrap(), "Atrium");
    }

    // -----------------------------------------------------------------
    // Test: documents come back in insertion order
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert("contacts", doc! { "n": 1_i32 }).await.unwrap();
        store.insert("contacts", doc! { "n": 2_i32 }).await.unwrap();
        store.insert("contacts", doc! { "n": 3_i32 }).await.unwrap();

        let docs = store.find_all("contacts").await.unwrap();
        let order: Vec<i32> = docs.iter().map(|d| d.get_i32("n").unwrap()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}

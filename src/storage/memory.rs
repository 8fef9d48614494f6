//! In-memory adapter, used by the integration tests.
//!
//! Mirrors the MongoDB adapter's observable behavior: minted ObjectId hex
//! ids, insertion-ordered reads, top-level equality filters.

use std::collections::HashMap;

use mongodb::bson::{Document, oid::ObjectId};
use tokio::sync::RwLock;

use crate::storage::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_doc(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    pub async fn find_docs(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let matching = documents
            .iter()
            .filter(|document| matches_filter(document, &filter))
            .cloned();
        Ok(match limit {
            Some(n) if n > 0 => matching.take(n as usize).collect(),
            _ => matching.collect(),
        })
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Top-level field equality, which is all the handlers ever filter by.
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

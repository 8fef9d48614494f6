//! Document store adapters.
//!
//! [`DocumentStore`] is the single seam the handlers talk to. Behind it sit
//! a MongoDB-backed adapter and an in-memory one for tests; both speak BSON
//! documents, and the typed conversion lives here so the adapters stay dumb.

pub mod memory;
pub mod mongo;

use mongodb::bson::{Document, from_document, to_document};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Longest backend diagnostic we ever surface to a caller.
const DIAGNOSTIC_CAP: usize = 160;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No live database handle. Reads fall back to seed data before hitting
    /// this; only writes surface it.
    #[error("document store is not connected")]
    Unavailable,
    #[error("document store write failed: {0}")]
    Write(String),
    #[error("document store read failed: {0}")]
    Read(String),
}

impl StoreError {
    pub(crate) fn write(message: impl ToString) -> Self {
        Self::Write(truncated(&message.to_string(), DIAGNOSTIC_CAP))
    }

    pub(crate) fn read(message: impl ToString) -> Self {
        Self::Read(truncated(&message.to_string(), DIAGNOSTIC_CAP))
    }
}

/// Character-safe prefix of `message`, for keeping driver errors log-sized.
pub fn truncated(message: &str, cap: usize) -> String {
    message.chars().take(cap).collect()
}

/// The store the app runs against, chosen once at startup.
pub enum DocumentStore {
    Mongo(MongoStore),
    Memory(MemoryStore),
}

impl DocumentStore {
    /// Persist `record` into `collection`, returning the new document id.
    pub async fn insert_one<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StoreError> {
        let document = to_document(record).map_err(StoreError::write)?;
        match self {
            Self::Mongo(store) => store.insert_doc(collection, document).await,
            Self::Memory(store) => store.insert_doc(collection, document).await,
        }
    }

    /// Fetch up to `limit` documents matching `filter` (insertion order).
    /// Documents that do not deserialize as `T` are skipped.
    pub async fn find_many<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<T>, StoreError> {
        let documents = match self {
            Self::Mongo(store) => store.find_docs(collection, filter, limit).await?,
            Self::Memory(store) => store.find_docs(collection, filter, limit).await?,
        };
        Ok(documents
            .into_iter()
            .filter_map(|mut document| {
                document.remove("_id");
                from_document(document).ok()
            })
            .collect())
    }

    /// Names of the collections currently present in the database.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        match self {
            Self::Mongo(store) => store.collection_names().await,
            Self::Memory(store) => store.collection_names().await,
        }
    }

    /// Whether a live database handle exists. A `true` here does not promise
    /// the server is still reachable; per-operation errors cover that.
    pub fn is_connected(&self) -> bool {
        match self {
            Self::Mongo(store) => store.is_connected(),
            Self::Memory(_) => true,
        }
    }
}

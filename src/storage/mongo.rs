//! MongoDB adapter.
//!
//! Connecting is lazy and never fails the process: a missing or unparseable
//! `DATABASE_URL` just leaves the store disconnected, and a reachable URL
//! whose server later goes away surfaces as per-operation errors.

use std::time::Duration;

use mongodb::bson::{Bson, Document, doc};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Database};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::storage::StoreError;

/// How long the driver hunts for a server before an operation errors out.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    /// Build a store from the app config. Never fails; a store without a
    /// database handle serves fallback reads and rejects writes.
    pub async fn connect(config: &AppConfig) -> Self {
        let Some(url) = &config.database_url else {
            warn!("DATABASE_URL is not set, store is disconnected");
            return Self::disconnected();
        };

        match Self::open_database(url, &config.database_name).await {
            Ok(db) => {
                // Diagnostic only: the handle is kept even if the ping fails,
                // the server may come back later.
                match db.run_command(doc! { "ping": 1 }, None).await {
                    Ok(_) => info!(database = %config.database_name, "connected to MongoDB"),
                    Err(err) => {
                        warn!(error = %err, "MongoDB is configured but not answering")
                    }
                }
                Self { db: Some(db) }
            }
            Err(err) => {
                warn!(error = %err, "could not parse DATABASE_URL, store is disconnected");
                Self::disconnected()
            }
        }
    }

    /// A store with no database handle at all.
    pub fn disconnected() -> Self {
        Self { db: None }
    }

    async fn open_database(url: &str, name: &str) -> mongodb::error::Result<Database> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        let client = Client::with_options(options)?;
        Ok(client.database(name))
    }

    pub async fn insert_doc(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StoreError> {
        let Some(db) = &self.db else {
            return Err(StoreError::Unavailable);
        };
        let result = db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(StoreError::write)?;
        Ok(match result.inserted_id {
            Bson::ObjectId(id) => id.to_hex(),
            other => other.to_string(),
        })
    }

    pub async fn find_docs(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        // Disconnected reads succeed empty so the fallback content applies.
        let Some(db) = &self.db else {
            return Ok(Vec::new());
        };
        let options = FindOptions::builder().limit(limit).build();
        let cursor = db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(StoreError::read)?;
        use futures::stream::TryStreamExt;
        cursor.try_collect().await.map_err(StoreError::read)
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let Some(db) = &self.db else {
            return Err(StoreError::Unavailable);
        };
        db.list_collection_names(None)
            .await
            .map_err(StoreError::read)
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{BulkWriteFailure, ErrorKind};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};

use quill_core::{BlogPost, PostId};
use quill_store::error::StoreError;
use quill_store::store::PostStore;

use crate::config::{DEFAULT_DATABASE, MongoConfig};

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB-backed post store using the official driver.
///
/// Posts live in a single collection. A unique index on `id` and a secondary
/// index on `category` are created on construction; failing to create them
/// is logged and does not prevent the store from being used.
pub struct MongoPostStore {
    client: Client,
    collection: Collection<BlogPost>,
}

impl MongoPostStore {
    /// Create a new store from the given configuration.
    ///
    /// The driver connects lazily, so an unreachable server does not fail
    /// construction; it surfaces as [`StoreError::Connection`] on first use.
    pub async fn new(config: &MongoConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        options.app_name = Some("quill".to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let database = resolve_database(
            config.database.as_deref(),
            options.default_database.as_deref(),
        );
        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let collection = client
            .database(&database)
            .collection::<BlogPost>(&config.collection);

        let store = Self { client, collection };

        if let Err(e) = store.ensure_indexes().await {
            tracing::warn!(
                database = %database,
                collection = %config.collection,
                error = %e,
                "failed to ensure post indexes"
            );
        }

        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let by_id = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_owned())
                    .build(),
            )
            .build();
        let by_category = IndexModel::builder().keys(doc! { "category": 1 }).build();

        self.collection
            .create_indexes([by_id, by_category], None)
            .await
            .map_err(map_error)?;

        tracing::debug!(collection = %self.collection.name(), "post indexes ensured");
        Ok(())
    }

    async fn find(&self, filter: Document) -> Result<Vec<BlogPost>, StoreError> {
        let cursor = self.collection.find(filter, None).await.map_err(map_error)?;
        cursor.try_collect().await.map_err(map_error)
    }
}

/// Pick the database name: explicit configuration first, then the connection
/// string's default database, then [`DEFAULT_DATABASE`].
fn resolve_database(configured: Option<&str>, from_url: Option<&str>) -> String {
    configured
        .or(from_url)
        .unwrap_or(DEFAULT_DATABASE)
        .to_owned()
}

/// Translate a driver error into a [`StoreError`].
fn map_error(e: mongodb::error::Error) -> StoreError {
    match e.kind.as_ref() {
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StoreError::Serialization(e.to_string())
        }
        ErrorKind::ServerSelection { .. } | ErrorKind::DnsResolve { .. } | ErrorKind::Io(_) => {
            StoreError::Connection(e.to_string())
        }
        _ => StoreError::Query(e.to_string()),
    }
}

/// Find the post whose insert tripped the unique index, if that is why the
/// bulk write failed.
fn duplicate_in(failure: &BulkWriteFailure, posts: &[BlogPost]) -> Option<PostId> {
    failure
        .write_errors
        .as_ref()?
        .iter()
        .find(|w| w.code == DUPLICATE_KEY)
        .and_then(|w| posts.get(w.index))
        .map(|p| p.id)
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        self.find(doc! {}).await
    }

    async fn get(&self, id: PostId) -> Result<Option<BlogPost>, StoreError> {
        self.collection
            .find_one(doc! { "id": id }, None)
            .await
            .map_err(map_error)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<BlogPost>, StoreError> {
        self.find(doc! { "category": category }).await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_many(doc! {}, None)
            .await
            .map_err(map_error)?;
        tracing::debug!(deleted = result.deleted_count, "posts deleted");
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, posts: &[BlogPost]) -> Result<u64, StoreError> {
        // The server rejects an empty batch.
        if posts.is_empty() {
            return Ok(0);
        }

        match self.collection.insert_many(posts, None).await {
            Ok(result) => Ok(result.inserted_ids.len() as u64),
            Err(e) => {
                if let ErrorKind::BulkWrite(failure) = e.kind.as_ref()
                    && let Some(id) = duplicate_in(failure, posts)
                {
                    return Err(StoreError::Duplicate(id));
                }
                Err(map_error(e))
            }
        }
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.collection
            .count_documents(doc! {}, None)
            .await
            .map_err(map_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_resolution_order() {
        assert_eq!(resolve_database(Some("cfg"), Some("url")), "cfg");
        assert_eq!(resolve_database(None, Some("projectMongo")), "projectMongo");
        assert_eq!(resolve_database(None, None), DEFAULT_DATABASE);
    }
}

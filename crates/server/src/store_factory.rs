use std::sync::Arc;
#[cfg(feature = "mongodb")]
use std::time::Duration;

use quill_store::PostStore;
use quill_store_memory::MemoryPostStore;
#[cfg(feature = "mongodb")]
use quill_store_mongodb::{MongoConfig, MongoPostStore};

use crate::config::StoreConfig;
use crate::error::ServerError;

/// Create a post store from the given configuration.
#[allow(clippy::unused_async)]
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn PostStore>, ServerError> {
    let store: Arc<dyn PostStore> = match config.backend.as_str() {
        "memory" => Arc::new(MemoryPostStore::new()),
        #[cfg(feature = "mongodb")]
        "mongodb" => {
            let mut mongo_config = MongoConfig::new(&config.url)
                .with_collection(&config.collection)
                .with_server_selection_timeout(Duration::from_secs(
                    config.server_selection_timeout_seconds,
                ));
            if let Some(database) = &config.database {
                mongo_config = mongo_config.with_database(database);
            }

            let store = MongoPostStore::new(&mongo_config)
                .await
                .map_err(|e| ServerError::Config(format!("store mongodb: {e}")))?;

            Arc::new(store)
        }
        other => {
            return Err(ServerError::Config(format!(
                "unknown store backend: {other} (is the feature enabled?)"
            )));
        }
    };

    tracing::info!(
        backend = %config.backend,
        collection = %config.collection,
        "post store initialized"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_starts_empty() {
        let config = StoreConfig {
            backend: "memory".into(),
            ..StoreConfig::default()
        };
        let store = create_store(&config).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_backend_is_config_error() {
        let config = StoreConfig {
            backend: "cassandra".into(),
            ..StoreConfig::default()
        };
        let err = create_store(&config).await.err().unwrap();
        assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("cassandra")));
    }
}

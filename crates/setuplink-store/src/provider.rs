//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use setuplink_core::config::store::StoreConfig;
use setuplink_core::error::AppError;
use setuplink_core::result::AppResult;
use setuplink_core::traits::store::{IndexEntry, IndexedStore};

/// Wraps the indexed store selected by configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store.
    inner: Arc<dyn IndexedStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn IndexedStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis indexed store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisIndexedStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory indexed store");
                Arc::new(crate::memory::MemoryIndexedStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn IndexedStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl IndexedStore for StoreManager {
    async fn put(&self, key: &str, value: &str, indexes: &[IndexEntry]) -> AppResult<()> {
        self.inner.put(key, value, indexes).await
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn get_by_index(&self, index: &IndexEntry) -> AppResult<Vec<String>> {
        self.inner.get_by_index(index).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

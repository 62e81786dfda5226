//! In-memory indexed store using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use setuplink_core::result::AppResult;
use setuplink_core::traits::store::{IndexEntry, IndexedStore};

use crate::keys;

/// In-memory indexed store for single-process deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndexedStore {
    /// Primary records by key.
    records: Arc<DashMap<String, String>>,
    /// Index bucket key -> primary keys, in insertion order.
    indexes: Arc<DashMap<String, Vec<String>>>,
    /// Primary key -> index bucket keys it is registered in.
    owned: Arc<DashMap<String, Vec<String>>>,
    /// Serializes writers so a record and its index entries change together.
    write_lock: Arc<Mutex<()>>,
}

impl MemoryIndexedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primary records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every index entry registered for `key`.
    fn unregister(&self, key: &str) {
        let Some((_, buckets)) = self.owned.remove(key) else {
            return;
        };
        for bucket_key in buckets {
            let emptied = match self.indexes.get_mut(&bucket_key) {
                Some(mut bucket) => {
                    bucket.retain(|k| k != key);
                    bucket.is_empty()
                }
                None => false,
            };
            if emptied {
                self.indexes.remove_if(&bucket_key, |_, bucket| bucket.is_empty());
            }
        }
    }

    fn register(&self, key: &str, index: &IndexEntry) {
        let bucket_key = keys::index_key(index);
        {
            let mut bucket = self.indexes.entry(bucket_key.clone()).or_default();
            if !bucket.iter().any(|k| k == key) {
                bucket.push(key.to_string());
            }
        }
        let mut owned = self.owned.entry(key.to_string()).or_default();
        if !owned.contains(&bucket_key) {
            owned.push(bucket_key);
        }
    }
}

#[async_trait]
impl IndexedStore for MemoryIndexedStore {
    async fn put(&self, key: &str, value: &str, indexes: &[IndexEntry]) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.unregister(key);
        self.records.insert(key.to_string(), value.to_string());
        for index in indexes {
            self.register(key, index);
        }
        debug!(key, indexes = indexes.len(), "Stored record");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.records.get(key).map(|v| v.value().clone()))
    }

    async fn get_by_index(&self, index: &IndexEntry) -> AppResult<Vec<String>> {
        let bucket_key = keys::index_key(index);
        let primary_keys = self
            .indexes
            .get(&bucket_key)
            .map(|bucket| bucket.value().clone())
            .unwrap_or_default();

        Ok(primary_keys
            .iter()
            .filter_map(|k| self.records.get(k).map(|v| v.value().clone()))
            .collect())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.records.remove(key);
        self.unregister(key);
        debug!(key, "Deleted record");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

//! Indexed key-value store trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::result::AppResult;

/// A named secondary index entry: `{ name, value }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Index name.
    pub name: String,
    /// Indexed value.
    pub value: String,
}

impl IndexEntry {
    /// Build an index entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Trait for key-value backends with secondary indexes.
///
/// Values are stored as JSON strings and returned exactly as written. An
/// index read reflects the most recent completed write for that key: a `put`
/// replaces every index entry previously registered for the key, and a
/// `delete` removes them. Readers must still tolerate stale entries from
/// backends that clean up lazily, which is why `get_by_index` skips keys whose
/// record is gone.
#[async_trait]
pub trait IndexedStore: Send + Sync + std::fmt::Debug + 'static {
    /// Upsert `value` under `key` and point each of `indexes` at it.
    async fn put(&self, key: &str, value: &str, indexes: &[IndexEntry]) -> AppResult<()>;

    /// Fetch the value stored under `key`.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Fetch every value whose index entry matches, in insertion order.
    async fn get_by_index(&self, index: &IndexEntry) -> AppResult<Vec<String>>;

    /// Remove `key` and its index entries. Missing keys are not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

impl dyn IndexedStore {
    /// Serialize `value` to JSON and store it.
    pub async fn put_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        indexes: &[IndexEntry],
    ) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.put(key, &json, indexes).await
    }

    /// Fetch and deserialize the value under `key`.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Fetch and deserialize every value matching `index`.
    pub async fn get_by_index_json<T: DeserializeOwned>(
        &self,
        index: &IndexEntry,
    ) -> AppResult<Vec<T>> {
        self.get_by_index(index)
            .await?
            .iter()
            .map(|value| serde_json::from_str(value).map_err(Into::into))
            .collect()
    }
}

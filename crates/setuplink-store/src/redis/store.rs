//! Redis indexed store implementation.
//!
//! Layout (all keys carry the configured prefix):
//! - `record:<key>` — the JSON value
//! - `idx:<name>:<value>` — list of primary keys, insertion ordered
//! - `owned:<key>` — list of index buckets the record is registered in
//!
//! Writes run as a `MULTI`/`EXEC` pipeline. The `owned:` list is read before
//! the pipeline, so two concurrent writers to the same key may leave a stale
//! bucket entry behind; `get_by_index` skips entries whose record is gone.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use setuplink_core::error::{AppError, ErrorKind};
use setuplink_core::result::AppResult;
use setuplink_core::traits::store::{IndexEntry, IndexedStore};

use super::client::RedisClient;
use crate::keys;

/// Redis-backed indexed store.
#[derive(Debug, Clone)]
pub struct RedisIndexedStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisIndexedStore {
    /// Create a new Redis indexed store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }

    /// Index buckets currently owned by `key` (unprefixed).
    async fn owned_buckets(&self, key: &str) -> AppResult<Vec<String>> {
        let owned_key = self.client.prefixed_key(&keys::owned_indexes_key(key));
        let mut conn = self.client.conn_mut();
        let buckets: Vec<String> = conn
            .lrange(&owned_key, 0, -1)
            .await
            .map_err(Self::map_err)?;
        Ok(buckets)
    }

    /// Queue commands that detach `key` from `buckets` and drop its owned list.
    fn queue_unregister(&self, pipe: &mut redis::Pipeline, key: &str, buckets: &[String]) {
        for bucket in buckets {
            pipe.cmd("LREM")
                .arg(self.client.prefixed_key(bucket))
                .arg(0)
                .arg(key)
                .ignore();
        }
        pipe.cmd("DEL")
            .arg(self.client.prefixed_key(&keys::owned_indexes_key(key)))
            .ignore();
    }
}

#[async_trait]
impl IndexedStore for RedisIndexedStore {
    async fn put(&self, key: &str, value: &str, indexes: &[IndexEntry]) -> AppResult<()> {
        let previous = self.owned_buckets(key).await?;
        let owned_key = self.client.prefixed_key(&keys::owned_indexes_key(key));

        let mut pipe = redis::pipe();
        pipe.atomic();
        self.queue_unregister(&mut pipe, key, &previous);
        pipe.cmd("SET")
            .arg(self.client.prefixed_key(&keys::record_key(key)))
            .arg(value)
            .ignore();
        for index in indexes {
            let bucket = keys::index_key(index);
            let full_bucket = self.client.prefixed_key(&bucket);
            pipe.cmd("LREM").arg(&full_bucket).arg(0).arg(key).ignore();
            pipe.cmd("RPUSH").arg(&full_bucket).arg(key).ignore();
            pipe.cmd("RPUSH").arg(&owned_key).arg(&bucket).ignore();
        }

        let mut conn = self.client.conn_mut();
        let _: () = pipe.query_async(&mut conn).await.map_err(Self::map_err)?;
        debug!(key, indexes = indexes.len(), "Stored record");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(&keys::record_key(key));
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn get_by_index(&self, index: &IndexEntry) -> AppResult<Vec<String>> {
        let bucket = self.client.prefixed_key(&keys::index_key(index));
        let mut conn = self.client.conn_mut();
        let primary_keys: Vec<String> = conn
            .lrange(&bucket, 0, -1)
            .await
            .map_err(Self::map_err)?;

        if primary_keys.is_empty() {
            return Ok(Vec::new());
        }

        let record_keys: Vec<String> = primary_keys
            .iter()
            .map(|k| self.client.prefixed_key(&keys::record_key(k)))
            .collect();
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&record_keys)
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;

        Ok(values.into_iter().flatten().collect())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let previous = self.owned_buckets(key).await?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        self.queue_unregister(&mut pipe, key, &previous);
        pipe.cmd("DEL")
            .arg(self.client.prefixed_key(&keys::record_key(key)))
            .ignore();

        let mut conn = self.client.conn_mut();
        let _: () = pipe.query_async(&mut conn).await.map_err(Self::map_err)?;
        debug!(key, "Deleted record");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}

use std::collections::HashMap;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::containers::DAY_SECONDS;
use crate::containers::structs::redis_counter::RedisCounter;

impl RedisCounter {
    pub fn new(client: RedisClient, cache_key: &str) -> RedisCounter {
        Self::with_options(client, cache_key, DAY_SECONDS, true)
    }

    pub fn with_options(client: RedisClient, cache_key: &str, expire_secs: i64, delete_zero: bool) -> RedisCounter {
        RedisCounter {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
            delete_zero,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub async fn count(&self, key: &str) -> Result<i64, CacheError> {
        let value: Option<i64> = self.client.hget(&self.cache_key, key).await?;
        Ok(value.unwrap_or(0))
    }

    /// Counts for a batch of keys; untracked keys report zero.
    pub async fn counts(&self, keys: &[&str]) -> Result<HashMap<String, i64>, CacheError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let values: Vec<Option<i64>> = self.client.hget_multiple(&self.cache_key, keys).await?;
        Ok(keys
            .iter()
            .zip(values)
            .map(|(key, value)| (key.to_string(), value.unwrap_or(0)))
            .collect())
    }

    /// Applies `delta` and returns the new count. A count that lands on
    /// exactly zero is removed when `delete_zero` is set, keeping the hash
    /// from accumulating dead entries.
    pub async fn incr(&self, key: &str, delta: i64) -> Result<i64, CacheError> {
        let new_count = self.client.hincr_by(&self.cache_key, key, delta).await?;
        if new_count == 0 && self.delete_zero {
            self.client.hdel(&self.cache_key, &[key]).await?;
        }
        self.client.expire(&self.cache_key, self.expire_secs).await?;
        Ok(new_count)
    }

    pub async fn remove(&self, keys: &[&str]) -> Result<u64, CacheError> {
        self.client.hdel(&self.cache_key, keys).await
    }

    pub async fn all_counts(&self) -> Result<HashMap<String, i64>, CacheError> {
        self.client.hget_all(&self.cache_key).await
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.client.delete(&[self.cache_key.as_str()]).await?;
        Ok(())
    }
}

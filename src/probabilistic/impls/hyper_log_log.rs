use log::warn;
use redis::ToRedisArgs;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::probabilistic::structs::hyper_log_log::HyperLogLog;

/// Counters usually outlive the burst that fills them; two months matches
/// the longest reporting window anyone reads them over.
pub const DEFAULT_EXPIRE_SECS: i64 = 3600 * 24 * 60;

impl HyperLogLog {
    pub fn new(client: RedisClient, cache_key: &str) -> HyperLogLog {
        Self::with_expire(client, cache_key, DEFAULT_EXPIRE_SECS)
    }

    pub fn with_expire(client: RedisClient, cache_key: &str, expire_secs: i64) -> HyperLogLog {
        HyperLogLog {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Records one item or a batch; duplicates are absorbed. Refreshes the
    /// key's expiration.
    pub async fn record<V: ToRedisArgs + Send + Sync>(&self, items: V) -> Result<(), CacheError> {
        self.client.pf_add(&self.cache_key, items).await?;
        self.client.expire(&self.cache_key, self.expire_secs).await?;
        Ok(())
    }

    /// Approximate distinct count. Standard error is about 0.81%; never
    /// treat the result as exact.
    pub async fn count(&self) -> Result<u64, CacheError> {
        self.client.pf_count(&[self.cache_key.as_str()]).await
    }

    /// Folds other estimators into this one (set-union semantics).
    pub async fn merge(&self, source_keys: &[&str]) -> Result<(), CacheError> {
        self.client.pf_merge(&self.cache_key, source_keys).await
    }

    /// Approximate distinct count of the union of `keys`, without mutating
    /// any of them. Computes through a disposable key that is removed even
    /// when the count fails partway.
    pub async fn merged_count(&self, keys: &[&str]) -> Result<u64, CacheError> {
        let temp_key = format!("hyperloglog_temp_key:{}", rand::random::<u32>());
        let result = self.merged_count_at(&temp_key, keys).await;
        if let Err(e) = self.client.delete(&[temp_key.as_str()]).await {
            warn!("failed to remove temp key {}: {}", temp_key, e);
        }
        result
    }

    async fn merged_count_at(&self, temp_key: &str, keys: &[&str]) -> Result<u64, CacheError> {
        self.client.pf_merge(temp_key, keys).await?;
        self.client.pf_count(&[temp_key]).await
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.client.delete(&[self.cache_key.as_str()]).await?;
        Ok(())
    }
}

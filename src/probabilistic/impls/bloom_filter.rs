use redis::ToRedisArgs;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::probabilistic::structs::bloom_filter::BloomFilter;

pub(crate) fn check_parameters(capacity: u64, error_rate: f64) -> Result<(), CacheError> {
    if capacity == 0 {
        return Err(CacheError::Parameter("bloom filter capacity must be positive".to_string()));
    }
    if !(error_rate > 0.0 && error_rate < 1.0) {
        return Err(CacheError::Parameter(format!(
            "bloom filter error rate {} must be within (0, 1)",
            error_rate
        )));
    }
    Ok(())
}

impl BloomFilter {
    /// Reserves the filter when the key does not exist yet.
    ///
    /// Filter parameters are fixed at reservation time. Creating a handle
    /// against an existing key keeps the stored filter as-is, whatever
    /// capacity and error rate it was reserved with; size the filter above
    /// the item count the scenario can produce, since overfilling drives the
    /// error rate up sharply.
    pub async fn create(
        client: RedisClient,
        cache_key: &str,
        capacity: u64,
        error_rate: f64,
    ) -> Result<BloomFilter, CacheError> {
        check_parameters(capacity, error_rate)?;
        if !client.exists(cache_key).await? {
            client.bf_reserve(cache_key, error_rate, capacity).await?;
        }
        Ok(BloomFilter {
            client,
            cache_key: cache_key.to_string(),
            capacity,
            error_rate,
        })
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Adds one item; `true` when the item was not present before (within
    /// the filter's error bound).
    pub async fn add<V: ToRedisArgs + Send + Sync>(&self, item: V) -> Result<bool, CacheError> {
        self.client.bf_add(&self.cache_key, item).await
    }

    /// Adds a batch, returning a newly-added flag per item.
    pub async fn add_many<V: ToRedisArgs + Send + Sync>(&self, items: V) -> Result<Vec<bool>, CacheError> {
        self.client.bf_madd(&self.cache_key, items).await
    }

    /// Membership check. `true` may be a false positive (bounded by the
    /// error rate); `false` is always correct.
    pub async fn exists<V: ToRedisArgs + Send + Sync>(&self, item: V) -> Result<bool, CacheError> {
        self.client.bf_exists(&self.cache_key, item).await
    }

    pub async fn exists_many<V: ToRedisArgs + Send + Sync>(&self, items: V) -> Result<Vec<bool>, CacheError> {
        self.client.bf_mexists(&self.cache_key, items).await
    }
}

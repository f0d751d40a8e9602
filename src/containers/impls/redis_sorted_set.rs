use std::marker::PhantomData;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::structs::redis_sorted_set::RedisSortedSet;

impl<T, C> RedisSortedSet<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(client: RedisClient, cache_key: &str, expire_secs: i64) -> RedisSortedSet<T, C> {
        RedisSortedSet {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
            _marker: PhantomData,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    /// Adds or rescores one member.
    pub async fn add(&self, score: f64, value: &T) -> Result<(), CacheError> {
        self.add_many(&[(score, value)]).await
    }

    /// Adds with the current time as score.
    pub async fn add_now(&self, value: &T) -> Result<(), CacheError> {
        let now = Utc::now().timestamp_millis() as f64 / 1000.0;
        self.add(now, value).await
    }

    pub async fn add_many(&self, items: &[(f64, &T)]) -> Result<(), CacheError> {
        if items.is_empty() {
            return Ok(());
        }
        let mut encoded = Vec::with_capacity(items.len());
        for (score, value) in items {
            encoded.push((*score, C::encode(*value)?));
        }
        self.client.zadd(&self.cache_key, &encoded).await?;
        self.refresh_expiry().await
    }

    pub async fn remove(&self, values: &[T]) -> Result<u64, CacheError> {
        if values.is_empty() {
            return Ok(0);
        }
        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            encoded.push(C::encode(value)?);
        }
        self.client.zrem(&self.cache_key, encoded).await
    }

    /// Members in `[min, max]` by score, both bounds inclusive, unbounded
    /// when `None`. `limit` is (offset, count) applied after ordering.
    pub async fn range_by_score(
        &self,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.client.zrange_by_score(&self.cache_key, min, max, limit, reverse).await?;
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn range_by_score_with_scores(
        &self,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<(T, f64)>, CacheError> {
        let raw: Vec<(Vec<u8>, f64)> = self
            .client
            .zrange_by_score_with_scores(&self.cache_key, min, max, limit, reverse)
            .await?;
        raw.iter()
            .map(|(data, score)| Ok((C::decode(data)?, *score)))
            .collect()
    }

    /// Members by rank, zero-based, negative ranks counting from the tail.
    pub async fn range_by_rank(&self, start: isize, stop: isize, reverse: bool) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = if reverse {
            self.client.zrevrange(&self.cache_key, start, stop).await?
        } else {
            self.client.zrange(&self.cache_key, start, stop).await?
        };
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn range_by_rank_with_scores(&self, start: isize, stop: isize) -> Result<Vec<(T, f64)>, CacheError> {
        let raw: Vec<(Vec<u8>, f64)> = self.client.zrange_with_scores(&self.cache_key, start, stop).await?;
        raw.iter()
            .map(|(data, score)| Ok((C::decode(data)?, *score)))
            .collect()
    }

    pub async fn count_by_score(&self, min: Option<f64>, max: Option<f64>) -> Result<u64, CacheError> {
        self.client.zcount(&self.cache_key, min, max).await
    }

    pub async fn score(&self, value: &T) -> Result<Option<f64>, CacheError> {
        self.client.zscore(&self.cache_key, C::encode(value)?).await
    }

    /// Adds `delta` to the member's score, inserting it at `delta` when
    /// absent. Returns the new score.
    pub async fn increment_score(&self, value: &T, delta: f64) -> Result<f64, CacheError> {
        let score = self.client.zincr_by(&self.cache_key, C::encode(value)?, delta).await?;
        self.refresh_expiry().await?;
        Ok(score)
    }

    pub async fn contains(&self, value: &T) -> Result<bool, CacheError> {
        Ok(self.score(value).await?.is_some())
    }

    /// Removes members with scores in `[min, max]`, bounds inclusive.
    pub async fn remove_range_by_score(&self, min: Option<f64>, max: Option<f64>) -> Result<u64, CacheError> {
        self.client.zrem_range_by_score(&self.cache_key, min, max).await
    }

    /// Removes members ranked in `[start, stop]`, bounds inclusive,
    /// negative ranks counting from the tail.
    pub async fn remove_range_by_rank(&self, start: isize, stop: isize) -> Result<u64, CacheError> {
        self.client.zrem_range_by_rank(&self.cache_key, start, stop).await
    }

    pub async fn len(&self) -> Result<u64, CacheError> {
        self.client.zcard(&self.cache_key).await
    }

    pub async fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len().await? == 0)
    }

    pub async fn cache_exists(&self) -> Result<bool, CacheError> {
        self.client.exists(&self.cache_key).await
    }

    pub async fn clear(&self) -> Result<(), CacheError> {
        self.client.delete(&[self.cache_key.as_str()]).await?;
        Ok(())
    }

    async fn refresh_expiry(&self) -> Result<(), CacheError> {
        self.client.expire(&self.cache_key, self.expire_secs).await?;
        Ok(())
    }
}

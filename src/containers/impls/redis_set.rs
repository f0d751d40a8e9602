use std::marker::PhantomData;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::structs::redis_set::RedisSet;

impl<T, C> RedisSet<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(client: RedisClient, cache_key: &str, expire_secs: i64) -> RedisSet<T, C> {
        RedisSet {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
            _marker: PhantomData,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub async fn add(&self, value: &T) -> Result<bool, CacheError> {
        let added = self.client.sadd(&self.cache_key, C::encode(value)?).await?;
        self.refresh_expiry().await?;
        Ok(added > 0)
    }

    /// Bulk add.
    pub async fn update(&self, values: &[T]) -> Result<u64, CacheError> {
        if values.is_empty() {
            return Ok(0);
        }
        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            encoded.push(C::encode(value)?);
        }
        let added = self.client.sadd(&self.cache_key, encoded).await?;
        self.refresh_expiry().await?;
        Ok(added)
    }

    /// Removes values that are present; absent values are ignored.
    pub async fn discard(&self, values: &[T]) -> Result<u64, CacheError> {
        if values.is_empty() {
            return Ok(0);
        }
        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            encoded.push(C::encode(value)?);
        }
        self.client.srem(&self.cache_key, encoded).await
    }

    pub async fn remove(&self, value: &T) -> Result<bool, CacheError> {
        Ok(self.client.srem(&self.cache_key, C::encode(value)?).await? > 0)
    }

    /// Removes and returns a random member.
    pub async fn pop(&self) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.client.spop(&self.cache_key).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(C::decode(&data)?)),
        }
    }

    /// Random sample of up to `count` distinct members, without removal.
    pub async fn sample(&self, count: i64) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.client.srandmember(&self.cache_key, count).await?;
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn members(&self) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.client.smembers(&self.cache_key).await?;
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn contains(&self, value: &T) -> Result<bool, CacheError> {
        self.client.sismember(&self.cache_key, C::encode(value)?).await
    }

    pub async fn len(&self) -> Result<u64, CacheError> {
        self.client.scard(&self.cache_key).await
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

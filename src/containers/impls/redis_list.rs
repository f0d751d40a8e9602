use std::marker::PhantomData;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::structs::redis_list::RedisList;

impl<T, C> RedisList<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(client: RedisClient, cache_key: &str, expire_secs: i64) -> RedisList<T, C> {
        RedisList {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
            _marker: PhantomData,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub async fn push_front(&self, value: &T) -> Result<(), CacheError> {
        self.client.lpush(&self.cache_key, C::encode(value)?).await?;
        self.refresh_expiry().await
    }

    pub async fn push_back(&self, value: &T) -> Result<(), CacheError> {
        self.client.rpush(&self.cache_key, C::encode(value)?).await?;
        self.refresh_expiry().await
    }

    pub async fn pop_front(&self) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.client.lpop(&self.cache_key).await?;
        match raw {
            None => Ok(None),
            Some(data) => {
                self.refresh_expiry().await?;
                Ok(Some(C::decode(&data)?))
            }
        }
    }

    pub async fn pop_back(&self) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.client.rpop(&self.cache_key).await?;
        match raw {
            None => Ok(None),
            Some(data) => {
                self.refresh_expiry().await?;
                Ok(Some(C::decode(&data)?))
            }
        }
    }

    /// Values in `[start, stop]` by index, bounds inclusive, negative
    /// indexes counting from the tail.
    pub async fn range(&self, start: isize, stop: isize) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.client.lrange(&self.cache_key, start, stop).await?;
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn get(&self, index: isize) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.client.lindex(&self.cache_key, index).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(C::decode(&data)?)),
        }
    }

    /// Overwrites the value at `index`; errors when the index is out of
    /// range, matching LSET.
    pub async fn set(&self, index: isize, value: &T) -> Result<(), CacheError> {
        self.client.lset(&self.cache_key, index, C::encode(value)?).await?;
        self.refresh_expiry().await
    }

    /// Removes every occurrence of `value`.
    pub async fn remove(&self, value: &T) -> Result<u64, CacheError> {
        let removed = self.client.lrem(&self.cache_key, 0, C::encode(value)?).await?;
        self.refresh_expiry().await?;
        Ok(removed)
    }

    /// Moves the tail element to the head.
    pub async fn rotate(&self) -> Result<(), CacheError> {
        self.client
            .rpoplpush::<Vec<u8>>(&self.cache_key, &self.cache_key)
            .await?;
        Ok(())
    }

    pub async fn len(&self) -> Result<u64, CacheError> {
        self.client.llen(&self.cache_key).await
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

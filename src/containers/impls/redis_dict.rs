use std::collections::HashMap;
use std::marker::PhantomData;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::structs::redis_dict::RedisDict;

impl<T, C> RedisDict<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(client: RedisClient, cache_key: &str, expire_secs: i64) -> RedisDict<T, C> {
        RedisDict {
            client,
            cache_key: cache_key.to_string(),
            expire_secs,
            _marker: PhantomData,
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub async fn get(&self, field: &str) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.client.hget(&self.cache_key, field).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(C::decode(&data)?)),
        }
    }

    /// Bulk get; absent fields are simply missing from the result.
    pub async fn get_multiple(&self, fields: &[&str]) -> Result<HashMap<String, T>, CacheError> {
        if fields.is_empty() {
            return Ok(HashMap::new());
        }
        let raw: Vec<Option<Vec<u8>>> = self.client.hget_multiple(&self.cache_key, fields).await?;
        let mut result = HashMap::with_capacity(fields.len());
        for (field, entry) in fields.iter().zip(raw) {
            if let Some(data) = entry {
                result.insert(field.to_string(), C::decode(&data)?);
            }
        }
        Ok(result)
    }

    pub async fn entries(&self) -> Result<HashMap<String, T>, CacheError> {
        let raw: HashMap<String, Vec<u8>> = self.client.hget_all(&self.cache_key).await?;
        raw.into_iter()
            .map(|(field, data)| Ok((field, C::decode(&data)?)))
            .collect()
    }

    pub async fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.client.hkeys(&self.cache_key).await
    }

    pub async fn values(&self) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.client.hvals(&self.cache_key).await?;
        raw.iter().map(|data| C::decode(data)).collect()
    }

    pub async fn set(&self, field: &str, value: &T) -> Result<(), CacheError> {
        self.client.hset(&self.cache_key, field, C::encode(value)?).await?;
        self.refresh_expiry().await
    }

    pub async fn update(&self, entries: &[(&str, T)]) -> Result<(), CacheError> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut encoded = Vec::with_capacity(entries.len());
        for (field, value) in entries {
            encoded.push((*field, C::encode(value)?));
        }
        self.client.hset_multiple(&self.cache_key, &encoded).await?;
        self.refresh_expiry().await
    }

    /// Stores `value` unless the field exists, returning whatever the field
    /// resolves to afterwards.
    pub async fn set_if_absent(&self, field: &str, value: &T) -> Result<T, CacheError>
    where
        T: Clone,
    {
        let inserted = self.client.hset_nx(&self.cache_key, field, C::encode(value)?).await?;
        if inserted {
            self.refresh_expiry().await?;
            return Ok(value.clone());
        }
        match self.get(field).await? {
            Some(existing) => Ok(existing),
            // The field vanished between the probe and the read.
            None => Ok(value.clone()),
        }
    }

    pub async fn contains(&self, field: &str) -> Result<bool, CacheError> {
        self.client.hexists(&self.cache_key, field).await
    }

    pub async fn remove(&self, field: &str) -> Result<bool, CacheError> {
        Ok(self.client.hdel(&self.cache_key, &[field]).await? > 0)
    }

    pub async fn remove_multiple(&self, fields: &[&str]) -> Result<u64, CacheError> {
        self.client.hdel(&self.cache_key, fields).await
    }

    /// Removes the field and returns its former value.
    pub async fn pop(&self, field: &str) -> Result<Option<T>, CacheError> {
        let value = self.get(field).await?;
        self.client.hdel(&self.cache_key, &[field]).await?;
        Ok(value)
    }

    /// Native-path HINCRBY. Only valid on fields maintained exclusively
    /// through this method; a packed field will fail server-side.
    pub async fn increment(&self, field: &str, delta: i64) -> Result<i64, CacheError> {
        let value = self.client.hincr_by(&self.cache_key, field, delta).await?;
        self.refresh_expiry().await?;
        Ok(value)
    }

    pub async fn len(&self) -> Result<u64, CacheError> {
        self.client.hlen(&self.cache_key).await
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

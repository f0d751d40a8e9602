use std::marker::PhantomData;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::structs::fifo_group_cache::FifoGroupCache;
use crate::containers::structs::redis_list::RedisList;

impl<T, C> FifoGroupCache<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(client: RedisClient, base_key: &str, expire_secs: i64, recycle: bool) -> FifoGroupCache<T, C> {
        FifoGroupCache {
            client,
            base_key: base_key.to_string(),
            expire_secs,
            recycle,
            _marker: PhantomData,
        }
    }

    pub fn group_key(&self, group_id: &str) -> String {
        format!("{}:{}", self.base_key, group_id)
    }

    pub fn registry_key(&self) -> String {
        format!("{}_general_list_group_set", self.base_key)
    }

    fn container(&self, group_id: &str) -> RedisList<T, C> {
        RedisList::new(self.client.clone(), &self.group_key(group_id), self.expire_secs)
    }

    /// Appends to the group's tail.
    pub async fn add_member(&self, group_id: &str, member: &T) -> Result<(), CacheError> {
        self.container(group_id).push_back(member).await?;
        if self.recycle {
            self.client.sadd(&self.registry_key(), group_id).await?;
        }
        Ok(())
    }

    /// Takes the oldest member, FIFO order.
    pub async fn pop_member(&self, group_id: &str) -> Result<Option<T>, CacheError> {
        let container = self.container(group_id);
        let member = container.pop_front().await?;
        self.unregister_if_empty(group_id, &container).await?;
        Ok(member)
    }

    /// Drains the whole group: returns every member and clears it.
    pub async fn pop_members(&self, group_id: &str) -> Result<Vec<T>, CacheError> {
        let container = self.container(group_id);
        let members = container.range(0, -1).await?;
        container.clear().await?;
        if self.recycle {
            self.client.srem(&self.registry_key(), group_id).await?;
        }
        Ok(members)
    }

    /// Peeks at `[start, stop]` without removal.
    pub async fn members(&self, group_id: &str, start: isize, stop: isize) -> Result<Vec<T>, CacheError> {
        self.container(group_id).range(start, stop).await
    }

    pub async fn remove_member(&self, group_id: &str, member: &T) -> Result<u64, CacheError> {
        let container = self.container(group_id);
        let removed = container.remove(member).await?;
        self.unregister_if_empty(group_id, &container).await?;
        Ok(removed)
    }

    pub async fn member_count(&self, group_id: &str) -> Result<u64, CacheError> {
        self.container(group_id).len().await
    }

    pub async fn clear_group(&self, group_id: &str) -> Result<(), CacheError> {
        self.container(group_id).clear().await?;
        if self.recycle {
            self.client.srem(&self.registry_key(), group_id).await?;
        }
        Ok(())
    }

    /// Clears every registered group, then the registry itself. A no-op
    /// without recycling.
    pub async fn clear_all(&self) -> Result<(), CacheError> {
        if !self.recycle {
            return Ok(());
        }
        for group_id in self.group_ids().await? {
            self.container(&group_id).clear().await?;
        }
        self.client.delete(&[self.registry_key().as_str()]).await?;
        Ok(())
    }

    pub async fn group_ids(&self) -> Result<Vec<String>, CacheError> {
        self.client.smembers(&self.registry_key()).await
    }

    pub async fn has_group(&self, group_id: &str) -> Result<bool, CacheError> {
        self.client.sismember(&self.registry_key(), group_id).await
    }

    async fn unregister_if_empty(&self, group_id: &str, container: &RedisList<T, C>) -> Result<(), CacheError> {
        if self.recycle && container.len().await? == 0 {
            self.client.srem(&self.registry_key(), group_id).await?;
        }
        Ok(())
    }
}

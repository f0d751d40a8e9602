use std::marker::PhantomData;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::ValueCodec;
use crate::containers::DAY_SECONDS;
use crate::containers::enums::retention_policy::RetentionPolicy;
use crate::containers::structs::redis_sorted_set::RedisSortedSet;
use crate::containers::structs::timeline_group_cache::TimelineGroupCache;

/// Time as a fractional-second epoch score.
pub(crate) fn epoch_seconds(at: Option<DateTime<Utc>>) -> f64 {
    let at = at.unwrap_or_else(Utc::now);
    at.timestamp_millis() as f64 / 1000.0
}

pub(crate) fn score_to_time(score: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis((score * 1000.0) as i64)
}

impl<T, C> TimelineGroupCache<T, C>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    C: ValueCodec,
{
    pub fn new(
        client: RedisClient,
        base_key: &str,
        expire_secs: i64,
        retention: Option<RetentionPolicy>,
        recycle: bool,
    ) -> TimelineGroupCache<T, C> {
        TimelineGroupCache {
            client,
            base_key: base_key.to_string(),
            expire_secs,
            retention,
            recycle,
            _marker: PhantomData,
        }
    }

    pub fn group_key(&self, group_id: &str) -> String {
        format!("{}:{}", self.base_key, group_id)
    }

    pub fn registry_key(&self) -> String {
        format!("{}:_GROUP_SET", self.base_key)
    }

    fn container(&self, group_id: &str) -> RedisSortedSet<T, C> {
        RedisSortedSet::new(self.client.clone(), &self.group_key(group_id), self.expire_secs)
    }

    /// Records the member at the given time (now when `None`). An existing
    /// member keeps its original time unless `force_update` is set.
    pub async fn add_member(
        &self,
        group_id: &str,
        member: &T,
        at: Option<DateTime<Utc>>,
        force_update: bool,
    ) -> Result<(), CacheError> {
        let container = self.container(group_id);
        if !force_update && container.contains(member).await? {
            return Ok(());
        }
        container.add(epoch_seconds(at), member).await?;
        if self.recycle {
            self.client.sadd(&self.registry_key(), group_id).await?;
        }
        self.enforce_retention(group_id, at).await
    }

    pub async fn add_members(&self, group_id: &str, entries: &[(T, DateTime<Utc>)]) -> Result<(), CacheError> {
        if entries.is_empty() {
            return Ok(());
        }
        let items: Vec<(f64, &T)> = entries
            .iter()
            .map(|(member, at)| (epoch_seconds(Some(*at)), member))
            .collect();
        self.container(group_id).add_many(&items).await?;
        if self.recycle {
            self.client.sadd(&self.registry_key(), group_id).await?;
        }
        self.enforce_retention(group_id, None).await
    }

    pub async fn is_member(&self, group_id: &str, member: &T) -> Result<bool, CacheError> {
        self.container(group_id).contains(member).await
    }

    pub async fn remove_member(&self, group_id: &str, member: &T) -> Result<u64, CacheError> {
        self.container(group_id).remove(std::slice::from_ref(member)).await
    }

    /// Members recorded inside the window, oldest first unless `reverse`.
    pub async fn members_by_time(
        &self,
        group_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<T>, CacheError> {
        self.container(group_id)
            .range_by_score(
                start.map(|at| epoch_seconds(Some(at))),
                end.map(|at| epoch_seconds(Some(at))),
                limit,
                reverse,
            )
            .await
    }

    pub async fn members_by_time_with_scores(
        &self,
        group_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<(T, f64)>, CacheError> {
        self.container(group_id)
            .range_by_score_with_scores(
                start.map(|at| epoch_seconds(Some(at))),
                end.map(|at| epoch_seconds(Some(at))),
                limit,
                reverse,
            )
            .await
    }

    pub async fn member_count_by_time(
        &self,
        group_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<u64, CacheError> {
        self.container(group_id)
            .count_by_score(
                start.map(|at| epoch_seconds(Some(at))),
                end.map(|at| epoch_seconds(Some(at))),
            )
            .await
    }

    /// When the member was recorded, `None` when absent.
    pub async fn member_join_time(&self, group_id: &str, member: &T) -> Result<Option<DateTime<Utc>>, CacheError> {
        let score = self.container(group_id).score(member).await?;
        Ok(score.and_then(score_to_time))
    }

    /// Members by rank; `descending` puts the most recent first.
    pub async fn members_by_rank(
        &self,
        group_id: &str,
        start: isize,
        stop: isize,
        descending: bool,
    ) -> Result<Vec<T>, CacheError> {
        self.container(group_id).range_by_rank(start, stop, descending).await
    }

    pub async fn member_count(&self, group_id: &str) -> Result<u64, CacheError> {
        self.container(group_id).len().await
    }

    /// Explicit rank-range removal. The bounds are required rather than
    /// defaulted so the caller states exactly what is being dropped.
    pub async fn clear_members_by_rank(&self, group_id: &str, start: isize, stop: isize) -> Result<u64, CacheError> {
        let container = self.container(group_id);
        let removed = container.remove_range_by_rank(start, stop).await?;
        self.unregister_if_empty(group_id, &container).await?;
        Ok(removed)
    }

    /// Drops every member of the group recorded at or before `deadline`.
    pub async fn clear_expired(&self, group_id: &str, deadline: DateTime<Utc>) -> Result<(), CacheError> {
        let container = self.container(group_id);
        container
            .remove_range_by_score(Some(0.0), Some(epoch_seconds(Some(deadline))))
            .await?;
        self.unregister_if_empty(group_id, &container).await
    }

    /// Sweep for periodic jobs: applies `clear_expired` to every group in
    /// the recycling registry. A no-op without recycling, since there is no
    /// record of which groups exist.
    pub async fn sweep_expired(&self, deadline: DateTime<Utc>) -> Result<(), CacheError> {
        if !self.recycle {
            return Ok(());
        }
        for group_id in self.group_ids().await? {
            self.clear_expired(&group_id, deadline).await?;
        }
        Ok(())
    }

    pub async fn clear_group(&self, group_id: &str) -> Result<(), CacheError> {
        self.container(group_id).clear().await?;
        if self.recycle {
            self.client.srem(&self.registry_key(), group_id).await?;
        }
        Ok(())
    }

    pub async fn group_ids(&self) -> Result<Vec<String>, CacheError> {
        self.client.smembers(&self.registry_key()).await
    }

    pub async fn has_group(&self, group_id: &str) -> Result<bool, CacheError> {
        self.client.sismember(&self.registry_key(), group_id).await
    }

    async fn enforce_retention(&self, group_id: &str, at: Option<DateTime<Utc>>) -> Result<(), CacheError> {
        match self.retention {
            None => Ok(()),
            Some(RetentionPolicy::TimeSpanDays(days)) => {
                let threshold = epoch_seconds(at) - (days as i64 * DAY_SECONDS) as f64;
                self.container(group_id)
                    .remove_range_by_score(Some(0.0), Some(threshold))
                    .await?;
                Ok(())
            }
            Some(RetentionPolicy::MaxLength(max_length)) => {
                // ZREMRANGEBYRANK removes the stop bound too, hence the -1:
                // everything up to rank -(N+1) leaves exactly N members.
                self.container(group_id)
                    .remove_range_by_rank(0, -(max_length as isize) - 1)
                    .await?;
                Ok(())
            }
        }
    }

    async fn unregister_if_empty(&self, group_id: &str, container: &RedisSortedSet<T, C>) -> Result<(), CacheError> {
        if self.recycle && container.len().await? == 0 {
            self.client.srem(&self.registry_key(), group_id).await?;
        }
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use log::error;
use redis::{AsyncCommands, FromRedisValue, ToRedisArgs};
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;
use crate::client::structs::connection_lease::ConnectionLease;
use crate::client::structs::connection_pool::ConnectionPool;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::{MsgPack, ValueCodec};
use crate::config::structs::redis_client_config::RedisClientConfig;

/// Upper bound on key length; longer keys are programmer errors.
pub const MAX_KEY_BYTES: usize = 128;

/// Formats an optional score bound for ZRANGEBYSCORE-family commands.
pub(crate) fn score_arg(score: Option<f64>, open_end: &str) -> String {
    match score {
        None => open_end.to_string(),
        Some(value) if value == f64::INFINITY => "+inf".to_string(),
        Some(value) if value == f64::NEG_INFINITY => "-inf".to_string(),
        Some(value) => value.to_string(),
    }
}

impl RedisClient {
    pub fn new(config: RedisClientConfig) -> Result<RedisClient, CacheError> {
        Ok(RedisClient { pool: Arc::new(ConnectionPool::new(config)?) })
    }

    pub fn from_pool(pool: Arc<ConnectionPool>) -> RedisClient {
        RedisClient { pool }
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }

    /// Leases a connection for a unit of work.
    ///
    /// Commands issued through one lease are sent in order over one link.
    /// The single-command helpers below lease internally; callers doing a
    /// burst of commands can hold a lease across all of them instead.
    pub async fn lease(&self) -> Result<ConnectionLease, CacheError> {
        self.pool.acquire().await
    }

    /// Invalidates every parked connection (see `ConnectionPool::reset`).
    pub fn reset_connections(&self) {
        self.pool.reset();
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut lease = self.lease().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut *lease)
            .await?;
        Ok(())
    }

    pub fn check_key(key: &str) -> Result<(), CacheError> {
        if key.len() > MAX_KEY_BYTES {
            return Err(CacheError::KeyTooLong { key: key.to_string(), length: key.len() });
        }
        Ok(())
    }

    /// Oversized keys are logged, not rejected: a long key still works on
    /// the server, and failing the call would turn a latent naming bug into
    /// a production outage.
    pub(crate) fn guard_key(key: &str) {
        if let Err(e) = Self::check_key(key) {
            error!("{}", e);
        }
    }

    // ------------------------------------------------------------------
    // keys
    // ------------------------------------------------------------------

    pub async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let found: bool = lease.exists(key).await?;
        Ok(found)
    }

    pub async fn expire(&self, key: &str, seconds: i64) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let applied: bool = lease.expire(key, seconds).await?;
        Ok(applied)
    }

    /// Deletes with UNLINK: the server reclaims the value in the background,
    /// so removing a large aggregate never stalls the event loop.
    pub async fn delete(&self, keys: &[&str]) -> Result<u64, CacheError> {
        if keys.is_empty() {
            return Ok(0);
        }
        for key in keys {
            Self::guard_key(key);
        }
        let mut lease = self.lease().await?;
        let removed: u64 = lease.unlink(keys).await?;
        Ok(removed)
    }

    /// Synchronous DEL, for callers that need the memory released before
    /// proceeding.
    pub async fn delete_sync(&self, keys: &[&str]) -> Result<u64, CacheError> {
        if keys.is_empty() {
            return Ok(0);
        }
        for key in keys {
            Self::guard_key(key);
        }
        let mut lease = self.lease().await?;
        let removed: u64 = lease.del(keys).await?;
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // strings
    // ------------------------------------------------------------------

    pub async fn get<RV: FromRedisValue>(&self, key: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = lease.get(key).await?;
        Ok(value)
    }

    pub async fn set<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, value: V) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    pub async fn set_ex<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, value: V, seconds: u64) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    pub async fn incr_by(&self, key: &str, delta: i64) -> Result<i64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: i64 = lease.incr(key, delta).await?;
        Ok(value)
    }

    pub async fn get_packed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.get(key).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(MsgPack::decode(&data)?)),
        }
    }

    pub async fn set_packed<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.set(key, MsgPack::encode(value)?).await
    }

    pub async fn set_ex_packed<T: Serialize + ?Sized>(&self, key: &str, value: &T, seconds: u64) -> Result<(), CacheError> {
        self.set_ex(key, MsgPack::encode(value)?, seconds).await
    }

    // ------------------------------------------------------------------
    // hashes
    // ------------------------------------------------------------------

    pub async fn hget<RV: FromRedisValue>(&self, key: &str, field: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = lease.hget(key, field).await?;
        Ok(value)
    }

    pub async fn hset<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, field: &str, value: V) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.hset::<_, _, _, ()>(key, field, value).await?;
        Ok(())
    }

    pub async fn hset_nx<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, field: &str, value: V) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let inserted: bool = lease.hset_nx(key, field, value).await?;
        Ok(inserted)
    }

    pub async fn hdel(&self, key: &str, fields: &[&str]) -> Result<u64, CacheError> {
        if fields.is_empty() {
            return Ok(0);
        }
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = lease.hdel(key, fields).await?;
        Ok(removed)
    }

    pub async fn hexists(&self, key: &str, field: &str) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let found: bool = lease.hexists(key, field).await?;
        Ok(found)
    }

    pub async fn hlen(&self, key: &str) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let length: u64 = lease.hlen(key).await?;
        Ok(length)
    }

    pub async fn hkeys(&self, key: &str) -> Result<Vec<String>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let fields: Vec<String> = lease.hkeys(key).await?;
        Ok(fields)
    }

    pub async fn hvals<RV: FromRedisValue>(&self, key: &str) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let values: Vec<RV> = lease.hvals(key).await?;
        Ok(values)
    }

    pub async fn hget_all<RV: FromRedisValue>(&self, key: &str) -> Result<HashMap<String, RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let entries: HashMap<String, RV> = lease.hgetall(key).await?;
        Ok(entries)
    }

    /// HINCRBY auto-initializes absent fields to zero; only valid on fields
    /// maintained exclusively through it (never on packed payloads).
    pub async fn hincr_by(&self, key: &str, field: &str, delta: i64) -> Result<i64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: i64 = lease.hincr(key, field, delta).await?;
        Ok(value)
    }

    pub async fn hset_multiple<V: ToRedisArgs + Send + Sync>(&self, key: &str, items: &[(&str, V)]) -> Result<(), CacheError> {
        if items.is_empty() {
            return Ok(());
        }
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.hset_multiple::<_, _, _, ()>(key, items).await?;
        Ok(())
    }

    pub async fn hget_multiple<RV: FromRedisValue>(&self, key: &str, fields: &[&str]) -> Result<Vec<Option<RV>>, CacheError> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let mut command = redis::cmd("HMGET");
        command.arg(key);
        for field in fields {
            command.arg(field);
        }
        let values: Vec<Option<RV>> = command.query_async(&mut *lease).await?;
        Ok(values)
    }

    pub async fn hget_packed<T: DeserializeOwned>(&self, key: &str, field: &str) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.hget(key, field).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(MsgPack::decode(&data)?)),
        }
    }

    pub async fn hset_packed<T: Serialize + ?Sized>(&self, key: &str, field: &str, value: &T) -> Result<(), CacheError> {
        self.hset(key, field, MsgPack::encode(value)?).await
    }

    pub async fn hset_nx_packed<T: Serialize + ?Sized>(&self, key: &str, field: &str, value: &T) -> Result<bool, CacheError> {
        self.hset_nx(key, field, MsgPack::encode(value)?).await
    }

    pub async fn hvals_packed<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.hvals(key).await?;
        raw.iter().map(|data| MsgPack::decode(data)).collect()
    }

    pub async fn hset_multiple_packed<T: Serialize>(&self, key: &str, items: &[(&str, T)]) -> Result<(), CacheError> {
        if items.is_empty() {
            return Ok(());
        }
        let mut encoded = Vec::with_capacity(items.len());
        for (field, value) in items {
            encoded.push((*field, MsgPack::encode(value)?));
        }
        self.hset_multiple(key, &encoded).await
    }

    /// Absent fields come back as `None`, without a decode attempt.
    pub async fn hget_multiple_packed<T: DeserializeOwned>(&self, key: &str, fields: &[&str]) -> Result<Vec<Option<T>>, CacheError> {
        let raw: Vec<Option<Vec<u8>>> = self.hget_multiple(key, fields).await?;
        raw.iter()
            .map(|entry| match entry {
                None => Ok(None),
                Some(data) => MsgPack::decode(data).map(Some),
            })
            .collect()
    }

    pub async fn hget_all_packed<T: DeserializeOwned>(&self, key: &str) -> Result<HashMap<String, T>, CacheError> {
        let raw: HashMap<String, Vec<u8>> = self.hget_all(key).await?;
        raw.into_iter()
            .map(|(field, data)| Ok((field, MsgPack::decode(&data)?)))
            .collect()
    }

    // ------------------------------------------------------------------
    // lists
    // ------------------------------------------------------------------

    pub async fn llen(&self, key: &str) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let length: u64 = lease.llen(key).await?;
        Ok(length)
    }

    pub async fn lpush<V: ToRedisArgs + Send + Sync>(&self, key: &str, value: V) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.lpush::<_, _, ()>(key, value).await?;
        Ok(())
    }

    pub async fn rpush<V: ToRedisArgs + Send + Sync>(&self, key: &str, value: V) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.rpush::<_, _, ()>(key, value).await?;
        Ok(())
    }

    pub async fn lpop<RV: FromRedisValue>(&self, key: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = redis::cmd("LPOP").arg(key).query_async(&mut *lease).await?;
        Ok(value)
    }

    pub async fn rpop<RV: FromRedisValue>(&self, key: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = redis::cmd("RPOP").arg(key).query_async(&mut *lease).await?;
        Ok(value)
    }

    pub async fn lrange<RV: FromRedisValue>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let values: Vec<RV> = lease.lrange(key, start, stop).await?;
        Ok(values)
    }

    pub async fn lrem<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, count: i64, value: V) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = lease.lrem(key, count as isize, value).await?;
        Ok(removed)
    }

    pub async fn lindex<RV: FromRedisValue>(&self, key: &str, index: isize) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = lease.lindex(key, index).await?;
        Ok(value)
    }

    pub async fn lset<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, index: isize, value: V) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        lease.lset::<_, _, ()>(key, index, value).await?;
        Ok(())
    }

    pub async fn rpoplpush<RV: FromRedisValue>(&self, source: &str, destination: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(source);
        Self::guard_key(destination);
        let mut lease = self.lease().await?;
        let value: Option<RV> = redis::cmd("RPOPLPUSH")
            .arg(source)
            .arg(destination)
            .query_async(&mut *lease)
            .await?;
        Ok(value)
    }

    pub async fn lpush_packed<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), CacheError> {
        if values.is_empty() {
            return Ok(());
        }
        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            encoded.push(MsgPack::encode(value)?);
        }
        self.lpush(key, encoded).await
    }

    pub async fn rpush_packed<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), CacheError> {
        if values.is_empty() {
            return Ok(());
        }
        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            encoded.push(MsgPack::encode(value)?);
        }
        self.rpush(key, encoded).await
    }

    pub async fn lpop_packed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.lpop(key).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(MsgPack::decode(&data)?)),
        }
    }

    pub async fn rpop_packed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.rpop(key).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(MsgPack::decode(&data)?)),
        }
    }

    pub async fn lrange_packed<T: DeserializeOwned>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.lrange(key, start, stop).await?;
        raw.iter().map(|data| MsgPack::decode(data)).collect()
    }

    pub async fn lrem_packed<T: Serialize + ?Sized>(&self, key: &str, count: i64, value: &T) -> Result<u64, CacheError> {
        self.lrem(key, count, MsgPack::encode(value)?).await
    }

    pub async fn lindex_packed<T: DeserializeOwned>(&self, key: &str, index: isize) -> Result<Option<T>, CacheError> {
        let raw: Option<Vec<u8>> = self.lindex(key, index).await?;
        match raw {
            None => Ok(None),
            Some(data) => Ok(Some(MsgPack::decode(&data)?)),
        }
    }

    pub async fn lset_packed<T: Serialize + ?Sized>(&self, key: &str, index: isize, value: &T) -> Result<(), CacheError> {
        self.lset(key, index, MsgPack::encode(value)?).await
    }

    // ------------------------------------------------------------------
    // sets
    // ------------------------------------------------------------------

    pub async fn sadd<V: ToRedisArgs + Send + Sync>(&self, key: &str, value: V) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let added: u64 = lease.sadd(key, value).await?;
        Ok(added)
    }

    pub async fn srem<V: ToRedisArgs + Send + Sync>(&self, key: &str, value: V) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = lease.srem(key, value).await?;
        Ok(removed)
    }

    pub async fn spop<RV: FromRedisValue>(&self, key: &str) -> Result<Option<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let value: Option<RV> = redis::cmd("SPOP").arg(key).query_async(&mut *lease).await?;
        Ok(value)
    }

    pub async fn srandmember<RV: FromRedisValue>(&self, key: &str, count: i64) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let values: Vec<RV> = redis::cmd("SRANDMEMBER")
            .arg(key)
            .arg(count)
            .query_async(&mut *lease)
            .await?;
        Ok(values)
    }

    pub async fn smembers<RV: FromRedisValue>(&self, key: &str) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let values: Vec<RV> = lease.smembers(key).await?;
        Ok(values)
    }

    pub async fn sismember<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, value: V) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let found: bool = lease.sismember(key, value).await?;
        Ok(found)
    }

    pub async fn scard(&self, key: &str) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let count: u64 = lease.scard(key).await?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // sorted sets
    // ------------------------------------------------------------------

    pub async fn zadd<V: ToRedisArgs + Send + Sync>(&self, key: &str, items: &[(f64, V)]) -> Result<u64, CacheError> {
        if items.is_empty() {
            return Ok(0);
        }
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let added: u64 = lease.zadd_multiple(key, items).await?;
        Ok(added)
    }

    pub async fn zrem<V: ToRedisArgs + Send + Sync>(&self, key: &str, members: V) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = lease.zrem(key, members).await?;
        Ok(removed)
    }

    pub async fn zscore<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, member: V) -> Result<Option<f64>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let score: Option<f64> = lease.zscore(key, member).await?;
        Ok(score)
    }

    pub async fn zincr_by<V: ToRedisArgs + Send + Sync + redis::ToSingleRedisArg>(&self, key: &str, member: V, delta: f64) -> Result<f64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let score: f64 = lease.zincr(key, member, delta).await?;
        Ok(score)
    }

    pub async fn zcard(&self, key: &str) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let count: u64 = lease.zcard(key).await?;
        Ok(count)
    }

    pub async fn zcount(&self, key: &str, min: Option<f64>, max: Option<f64>) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let count: u64 = redis::cmd("ZCOUNT")
            .arg(key)
            .arg(score_arg(min, "-inf"))
            .arg(score_arg(max, "+inf"))
            .query_async(&mut *lease)
            .await?;
        Ok(count)
    }

    pub async fn zrange<RV: FromRedisValue>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let members: Vec<RV> = lease.zrange(key, start, stop).await?;
        Ok(members)
    }

    pub async fn zrevrange<RV: FromRedisValue>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let members: Vec<RV> = lease.zrevrange(key, start, stop).await?;
        Ok(members)
    }

    pub async fn zrange_with_scores<RV: FromRedisValue>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<(RV, f64)>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let members: Vec<(RV, f64)> = lease.zrange_withscores(key, start, stop).await?;
        Ok(members)
    }

    pub async fn zrange_by_score<RV: FromRedisValue>(
        &self,
        key: &str,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<RV>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let command = Self::range_by_score_command(key, min, max, limit, reverse, false);
        let members: Vec<RV> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    pub async fn zrange_by_score_with_scores<RV: FromRedisValue>(
        &self,
        key: &str,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<(RV, f64)>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let command = Self::range_by_score_command(key, min, max, limit, reverse, true);
        let members: Vec<(RV, f64)> = command.query_async(&mut *lease).await?;
        Ok(members)
    }

    fn range_by_score_command(
        key: &str,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
        with_scores: bool,
    ) -> redis::Cmd {
        // ZREVRANGEBYSCORE takes its bounds max first.
        let mut command = if reverse {
            let mut command = redis::cmd("ZREVRANGEBYSCORE");
            command.arg(key).arg(score_arg(max, "+inf")).arg(score_arg(min, "-inf"));
            command
        } else {
            let mut command = redis::cmd("ZRANGEBYSCORE");
            command.arg(key).arg(score_arg(min, "-inf")).arg(score_arg(max, "+inf"));
            command
        };
        if with_scores {
            command.arg("WITHSCORES");
        }
        if let Some((offset, count)) = limit {
            command.arg("LIMIT").arg(offset).arg(count);
        }
        command
    }

    pub async fn zrem_range_by_score(&self, key: &str, min: Option<f64>, max: Option<f64>) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = redis::cmd("ZREMRANGEBYSCORE")
            .arg(key)
            .arg(score_arg(min, "-inf"))
            .arg(score_arg(max, "+inf"))
            .query_async(&mut *lease)
            .await?;
        Ok(removed)
    }

    pub async fn zrem_range_by_rank(&self, key: &str, start: isize, stop: isize) -> Result<u64, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let removed: u64 = lease.zremrangebyrank(key, start, stop).await?;
        Ok(removed)
    }

    /// Packed sorted-set insert: members are encoded, scores stay numeric so
    /// the server keeps native ordering.
    pub async fn zadd_packed<T: Serialize>(&self, key: &str, items: &[(f64, T)]) -> Result<u64, CacheError> {
        if items.is_empty() {
            return Ok(0);
        }
        let mut encoded = Vec::with_capacity(items.len());
        for (score, member) in items {
            encoded.push((*score, MsgPack::encode(member)?));
        }
        self.zadd(key, &encoded).await
    }

    pub async fn zrem_packed<T: Serialize>(&self, key: &str, members: &[T]) -> Result<u64, CacheError> {
        if members.is_empty() {
            return Ok(0);
        }
        let mut encoded = Vec::with_capacity(members.len());
        for member in members {
            encoded.push(MsgPack::encode(member)?);
        }
        self.zrem(key, encoded).await
    }

    pub async fn zscore_packed<T: Serialize + ?Sized>(&self, key: &str, member: &T) -> Result<Option<f64>, CacheError> {
        self.zscore(key, MsgPack::encode(member)?).await
    }

    pub async fn zincr_by_packed<T: Serialize + ?Sized>(&self, key: &str, member: &T, delta: f64) -> Result<f64, CacheError> {
        self.zincr_by(key, MsgPack::encode(member)?, delta).await
    }

    pub async fn zrange_packed<T: DeserializeOwned>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.zrange(key, start, stop).await?;
        raw.iter().map(|data| MsgPack::decode(data)).collect()
    }

    pub async fn zrevrange_packed<T: DeserializeOwned>(&self, key: &str, start: isize, stop: isize) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.zrevrange(key, start, stop).await?;
        raw.iter().map(|data| MsgPack::decode(data)).collect()
    }

    pub async fn zrange_by_score_packed<T: DeserializeOwned>(
        &self,
        key: &str,
        min: Option<f64>,
        max: Option<f64>,
        limit: Option<(isize, isize)>,
        reverse: bool,
    ) -> Result<Vec<T>, CacheError> {
        let raw: Vec<Vec<u8>> = self.zrange_by_score(key, min, max, limit, reverse).await?;
        raw.iter().map(|data| MsgPack::decode(data)).collect()
    }

    // ------------------------------------------------------------------
    // HyperLogLog
    // ------------------------------------------------------------------

    pub async fn pf_add<V: ToRedisArgs + Send + Sync>(&self, key: &str, items: V) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let changed: bool = lease.pfadd(key, items).await?;
        Ok(changed)
    }

    pub async fn pf_count(&self, keys: &[&str]) -> Result<u64, CacheError> {
        if keys.is_empty() {
            return Err(CacheError::Parameter("pf_count requires at least one key".to_string()));
        }
        for key in keys {
            Self::guard_key(key);
        }
        let mut lease = self.lease().await?;
        let count: u64 = lease.pfcount(keys).await?;
        Ok(count)
    }

    pub async fn pf_merge(&self, destination: &str, sources: &[&str]) -> Result<(), CacheError> {
        if sources.is_empty() {
            return Err(CacheError::Parameter("pf_merge requires at least one source key".to_string()));
        }
        Self::guard_key(destination);
        for key in sources {
            Self::guard_key(key);
        }
        let mut lease = self.lease().await?;
        lease.pfmerge::<_, _, ()>(destination, sources).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bloom filter (RedisBloom module)
    // ------------------------------------------------------------------

    pub async fn bf_reserve(&self, key: &str, error_rate: f64, capacity: u64) -> Result<(), CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        redis::cmd("BF.RESERVE")
            .arg(key)
            .arg(error_rate)
            .arg(capacity)
            .query_async::<()>(&mut *lease)
            .await?;
        Ok(())
    }

    pub async fn bf_add<V: ToRedisArgs + Send + Sync>(&self, key: &str, item: V) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let newly_added: bool = redis::cmd("BF.ADD")
            .arg(key)
            .arg(item)
            .query_async(&mut *lease)
            .await?;
        Ok(newly_added)
    }

    pub async fn bf_madd<V: ToRedisArgs + Send + Sync>(&self, key: &str, items: V) -> Result<Vec<bool>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let flags: Vec<bool> = redis::cmd("BF.MADD")
            .arg(key)
            .arg(items)
            .query_async(&mut *lease)
            .await?;
        Ok(flags)
    }

    pub async fn bf_exists<V: ToRedisArgs + Send + Sync>(&self, key: &str, item: V) -> Result<bool, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let found: bool = redis::cmd("BF.EXISTS")
            .arg(key)
            .arg(item)
            .query_async(&mut *lease)
            .await?;
        Ok(found)
    }

    pub async fn bf_mexists<V: ToRedisArgs + Send + Sync>(&self, key: &str, items: V) -> Result<Vec<bool>, CacheError> {
        Self::guard_key(key);
        let mut lease = self.lease().await?;
        let flags: Vec<bool> = redis::cmd("BF.MEXISTS")
            .arg(key)
            .arg(items)
            .query_async(&mut *lease)
            .await?;
        Ok(flags)
    }
}

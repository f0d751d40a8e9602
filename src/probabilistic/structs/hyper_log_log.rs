use crate::client::structs::redis_client::RedisClient;

/// Distinct-count estimator over a single Redis HyperLogLog key.
///
/// Typical use is unique-visitor counting, where a page-view key records
/// user ids and `count` reads the deduplicated total without storing the
/// ids themselves.
#[derive(Debug, Clone)]
pub struct HyperLogLog {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
}

use crate::client::structs::redis_client::RedisClient;

/// Hash of integer counters on the native path.
///
/// Backed by a hash rather than a sorted set: nothing here ranks entries,
/// and plain HINCRBY updates are cheaper.
#[derive(Debug, Clone)]
pub struct RedisCounter {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
    /// Remove entries whose count reaches exactly zero.
    pub(crate) delete_zero: bool,
}

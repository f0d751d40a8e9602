use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;

/// Unordered container of unique codec-packed members.
///
/// Membership compares encoded bytes, so types whose encoding is not stable
/// across equal values (maps with nondeterministic order, floats) will not
/// deduplicate reliably.
#[derive(Debug, Clone)]
pub struct RedisSet<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

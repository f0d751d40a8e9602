use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;

/// Members ordered by numeric score; members are codec-packed, scores stay
/// native for server-side ordering.
#[derive(Debug, Clone)]
pub struct RedisSortedSet<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

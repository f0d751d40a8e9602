use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;

/// Hash-backed field/value map with codec-packed values.
///
/// Fields touched by `increment` live on the native integer path and must
/// never be read back through `get`.
#[derive(Debug, Clone)]
pub struct RedisDict<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;

/// Double-ended list of codec-packed values with indexed access.
#[derive(Debug, Clone)]
pub struct RedisList<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;

/// Family of FIFO lists, one per caller-supplied group id.
///
/// Pure insertion order, no scores. The recycling registry works as in
/// `TimelineGroupCache`; group ids expired by the server stay in the
/// registry until a sweep touches them.
#[derive(Debug, Clone)]
pub struct FifoGroupCache<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) base_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) recycle: bool,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

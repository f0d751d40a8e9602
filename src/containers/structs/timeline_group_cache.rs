use std::marker::PhantomData;
use crate::client::structs::redis_client::RedisClient;
use crate::client::traits::value_codec::MsgPack;
use crate::containers::enums::retention_policy::RetentionPolicy;

/// Family of time-scored sorted sets, one per caller-supplied group id.
///
/// Each insert records (member, time-as-score); the configured retention
/// policy is enforced after every insert. With recycling on, every group id
/// ever populated is tracked in a registry set so a sweep job can expire old
/// groups; leave it off for high-cardinality group spaces, where the
/// registry itself would grow without bound.
#[derive(Debug, Clone)]
pub struct TimelineGroupCache<T, C = MsgPack> {
    pub(crate) client: RedisClient,
    pub(crate) base_key: String,
    pub(crate) expire_secs: i64,
    pub(crate) retention: Option<RetentionPolicy>,
    pub(crate) recycle: bool,
    pub(crate) _marker: PhantomData<fn() -> (T, C)>,
}

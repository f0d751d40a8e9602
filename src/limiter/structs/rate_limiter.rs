use crate::client::structs::redis_client::RedisClient;
use crate::limiter::structs::rate::Rate;

#[derive(Debug, Clone)]
pub struct RateLimiter {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) capacity: u64,
    pub(crate) rate: Rate,
}

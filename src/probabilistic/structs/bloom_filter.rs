use crate::client::structs::redis_client::RedisClient;

#[derive(Debug, Clone)]
pub struct BloomFilter {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
    pub(crate) capacity: u64,
    pub(crate) error_rate: f64,
}

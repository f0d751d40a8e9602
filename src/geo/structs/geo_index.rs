use crate::client::structs::redis_client::RedisClient;

#[derive(Debug, Clone)]
pub struct GeoIndex {
    pub(crate) client: RedisClient,
    pub(crate) cache_key: String,
}

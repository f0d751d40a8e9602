use std::collections::HashMap;
use crate::client::structs::redis_client::RedisClient;

/// Named clients resolved from configuration, connected once at startup.
#[derive(Debug)]
pub struct ClientRegistry {
    pub(crate) clients: HashMap<String, RedisClient>,
}

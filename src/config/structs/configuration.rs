use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::redis_client_config::RedisClientConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub clients: BTreeMap<String, RedisClientConfig>,
}

use std::sync::Arc;
use crate::client::structs::connection_pool::ConnectionPool;

#[derive(Debug, Clone)]
pub struct RedisClient {
    pub(crate) pool: Arc<ConnectionPool>,
}

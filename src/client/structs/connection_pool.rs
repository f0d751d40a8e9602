use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;
use tokio::sync::Semaphore;
use crate::client::structs::connection_lease::ParkedConnection;
use crate::config::structs::redis_client_config::RedisClientConfig;

#[derive(Debug)]
pub struct ConnectionPool {
    pub(crate) config: RedisClientConfig,
    pub(crate) client: redis::Client,
    /// Bumped by `reset()`; parked connections from older generations are
    /// discarded instead of reused.
    pub(crate) generation: AtomicU64,
    pub(crate) idle: Mutex<Vec<ParkedConnection>>,
    pub(crate) slots: Arc<Semaphore>,
}

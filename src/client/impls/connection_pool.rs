use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use log::{debug, warn};
use parking_lot::Mutex;
use redis::AsyncConnectionConfig;
use redis::aio::MultiplexedConnection;
use tokio::sync::Semaphore;
use crate::client::errors::CacheError;
use crate::client::structs::connection_lease::{ConnectionLease, ParkedConnection};
use crate::client::structs::connection_pool::ConnectionPool;
use crate::config::structs::redis_client_config::RedisClientConfig;

impl ConnectionPool {
    pub fn new(config: RedisClientConfig) -> Result<ConnectionPool, CacheError> {
        let client = redis::Client::open(config.connection_url())
            .map_err(|e| CacheError::Connection(format!("failed to create Redis client: {}", e)))?;
        Ok(ConnectionPool {
            slots: Arc::new(Semaphore::new(config.max_connections as usize)),
            generation: AtomicU64::new(0),
            idle: Mutex::new(Vec::new()),
            config,
            client,
        })
    }

    /// Leases a connection for the calling task.
    ///
    /// Parked connections are reused unless they belong to an older pool
    /// generation or sat idle past `max_idle_secs`; both kinds are dropped
    /// here and replaced with a fresh link, since the remote end closes
    /// links it considers abandoned and a forked child must not reuse its
    /// parent's sockets.
    pub async fn acquire(self: &Arc<Self>) -> Result<ConnectionLease, CacheError> {
        let permit = self.slots.clone()
            .acquire_owned()
            .await
            .map_err(|_| CacheError::Connection("connection pool is closed".to_string()))?;
        let current = self.generation.load(Ordering::Acquire);
        let max_idle = Duration::from_secs(self.config.max_idle_secs);
        loop {
            let parked = self.idle.lock().pop();
            match parked {
                None => break,
                Some(parked) => {
                    if parked.generation != current {
                        debug!("discarding connection from stale generation {}", parked.generation);
                        continue;
                    }
                    if parked.parked_at.elapsed() > max_idle {
                        warn!(
                            "disconnecting redis connection to {}:{} idle for {}s",
                            self.config.host, self.config.port, parked.parked_at.elapsed().as_secs()
                        );
                        continue;
                    }
                    return Ok(ConnectionLease {
                        connection: parked.connection,
                        generation: parked.generation,
                        pool: self.clone(),
                        _permit: permit,
                    });
                }
            }
        }
        let connection = self.connect().await?;
        Ok(ConnectionLease {
            connection,
            generation: current,
            pool: self.clone(),
            _permit: permit,
        })
    }

    async fn connect(&self) -> Result<MultiplexedConnection, CacheError> {
        let connection_config = AsyncConnectionConfig::new()
            .set_connection_timeout(Some(Duration::from_millis(self.config.connect_timeout_ms)))
            .set_response_timeout(Some(Duration::from_millis(self.config.socket_timeout_ms)));
        self.client
            .get_multiplexed_async_connection_with_config(&connection_config)
            .await
            .map_err(|e| CacheError::Connection(format!(
                "failed to connect to Redis at {}:{}: {}",
                self.config.host, self.config.port, e
            )))
    }

    /// Invalidates every parked connection at once.
    ///
    /// Call after a process fork or a failover: the next lease in each task
    /// reconnects instead of reusing a link created under the old identity.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.idle.lock().clear();
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Shuts the pool down: parked connections are dropped and every later
    /// `acquire` fails, so an embedding process can stop handing out leases
    /// before it exits.
    pub fn close(&self) {
        self.slots.close();
        self.idle.lock().clear();
    }

    pub(crate) fn release(&self, connection: MultiplexedConnection, generation: u64) {
        if generation != self.generation.load(Ordering::Acquire) {
            return;
        }
        self.idle.lock().push(ParkedConnection {
            connection,
            generation,
            parked_at: std::time::Instant::now(),
        });
    }
}

use std::sync::Arc;
use std::time::Instant;
use redis::aio::MultiplexedConnection;
use tokio::sync::OwnedSemaphorePermit;
use crate::client::structs::connection_pool::ConnectionPool;

/// A connection waiting in the pool between leases.
#[derive(Debug)]
pub struct ParkedConnection {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) generation: u64,
    pub(crate) parked_at: Instant,
}

/// A leased connection, bound to the calling task for a unit of work.
///
/// The lease dereferences to the driver connection, so several commands can
/// be issued on one lease without touching the pool in between. Dropping the
/// lease parks the connection again and frees its pool slot.
#[derive(Debug)]
pub struct ConnectionLease {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) generation: u64,
    pub(crate) pool: Arc<ConnectionPool>,
    pub(crate) _permit: OwnedSemaphorePermit,
}

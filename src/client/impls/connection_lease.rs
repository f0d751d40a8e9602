use std::ops::{Deref, DerefMut};
use redis::aio::MultiplexedConnection;
use crate::client::structs::connection_lease::ConnectionLease;

impl Deref for ConnectionLease {
    type Target = MultiplexedConnection;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for ConnectionLease {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}

impl Drop for ConnectionLease {
    fn drop(&mut self) {
        // The driver handle is a cheap clone over one multiplexed link.
        self.pool.release(self.connection.clone(), self.generation);
    }
}

//! Connection and client structures.

/// Named-client registry resolved from configuration at startup.
pub mod client_registry;

/// RAII lease over a pooled connection.
pub mod connection_lease;

/// Bounded, generation-aware connection pool.
pub mod connection_pool;

/// Typed command facade over the pool.
pub mod redis_client;

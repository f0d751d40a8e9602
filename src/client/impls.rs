//! Implementation blocks for connection and client structures.

/// Registry construction and lookup.
pub mod client_registry;

/// Lease deref and release-on-drop behavior.
pub mod connection_lease;

/// Pool lifecycle: connect, lease, park, reset.
pub mod connection_pool;

/// The typed command layer.
pub mod redis_client;

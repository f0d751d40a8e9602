//! Connection pooling and the typed command layer.
//!
//! This module owns everything between the container types and the wire:
//! a bounded pool of multiplexed connections handed out as RAII leases, a
//! `RedisClient` exposing the command surface, and the value codecs used to
//! pack non-string payloads.
//!
//! # Architecture
//!
//! - `ConnectionPool` opens connections lazily, bounds them with a semaphore
//!   and parks them between leases. A generation token invalidates every
//!   parked connection at once so handles inherited across a process fork are
//!   never reused.
//! - `ConnectionLease` is the per-unit-of-work handle; dropping it returns
//!   the connection to the pool. It dereferences to the underlying driver
//!   connection, so one lease can issue many commands back to back.
//! - `RedisClient` is a cheap-to-clone facade over the pool. Its native
//!   methods pass string/number payloads through unchanged; the `_packed`
//!   family encodes values with MessagePack on the way in and decodes on the
//!   way out. Numeric helpers (INCRBY and friends) are only valid on keys
//!   written through the native path.
//! - `ClientRegistry` resolves configured client names to connected clients
//!   once at startup, so a misconfigured endpoint fails fast instead of on
//!   first use.
//!
//! # Key Discipline
//!
//! Every command checks its key against a 128 byte bound before dispatch.
//! Violations are logged rather than fatal, matching how the backend treats
//! oversized keys as programmer errors to fix, not conditions to handle.

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the pool, lease, client and registry.
pub mod impls;

/// Data structures for connections and clients.
pub mod structs;

/// Value codec trait and implementations.
pub mod traits;

mod tests;

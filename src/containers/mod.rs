//! Composite cache containers.
//!
//! Container types layered on the typed command layer. Each wraps one Redis
//! key (or, for the group caches, a family of keys derived from a base key)
//! and owns its serialization through a `ValueCodec` chosen once per
//! container, MessagePack unless stated otherwise.
//!
//! # Lifecycle
//!
//! Containers are created lazily on first write. Every mutating operation
//! refreshes the container's expiration, so an actively used container stays
//! alive and an abandoned one ages out on its own. Deletion is explicit
//! (`clear`) or via TTL expiry; nothing here survives past its last-set
//! expiration.
//!
//! # Shapes
//!
//! - `RedisDict` - hash-backed field/value map
//! - `RedisSet` - unordered unique members
//! - `RedisSortedSet` - members ordered by numeric score
//! - `RedisList` - double-ended list with indexed access
//! - `RedisCounter` - hash of integer counters on the native path
//! - `DailyCounter` - counter keyed by the calendar date
//! - `TimelineGroupCache` - per-group sorted sets scored by time, with a
//!   retention policy and an optional recycling registry
//! - `FifoGroupCache` - per-group lists in insertion order

/// Default container lifetime.
pub const DAY_SECONDS: i64 = 60 * 60 * 24;

/// Lifetime for slow-moving containers such as badge and profile caches.
pub const MONTH_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Retention policy enumeration.
pub mod enums;

/// Container structures.
pub mod structs;

/// Container operations.
pub mod impls;

mod tests;

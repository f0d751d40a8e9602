//! # Redis Containers
//!
//! A typed container layer over Redis for backend services that lean on Redis for
//! shared state: caches, timelines, geo lookups, deduplicated counting and
//! request throttling.
//!
//! ## Overview
//!
//! The crate wraps the async `redis` driver with a bounded, generation-aware
//! connection pool and a command layer that transparently packs arbitrary
//! serde values into Redis strings. On top of that sit higher-level containers:
//! dictionaries, sets, sorted sets, lists, time-windowed group caches with
//! retention policies, a geo index, HyperLogLog cardinality estimation, a
//! Bloom filter and a token-bucket rate limiter.
//!
//! ## Features
//!
//! - **Pooled Connections**: Leased per unit of work, bounded by a semaphore,
//!   with idle-connection recycling and a generation token that invalidates
//!   every parked connection at once (pre-fork worker safety)
//! - **Packed Values**: MessagePack (or JSON) encoding for non-string payloads,
//!   chosen once per container; native pass-through for strings and numbers
//! - **Geo Index**: distance, position and radius queries with unit conversion
//! - **Probabilistic Structures**: HyperLogLog counting and Bloom membership,
//!   both with documented error bounds
//! - **Rate Limiting**: token bucket evaluated by a single server-side script,
//!   atomic under concurrent callers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redis_containers::config::structs::configuration::Configuration;
//! use redis_containers::client::structs::client_registry::ClientRegistry;
//! use redis_containers::containers::structs::redis_dict::RedisDict;
//!
//! let config = Configuration::load_from_file(false)?;
//! let registry = ClientRegistry::connect(&config).await?;
//! let client = registry.get("default")?.clone();
//!
//! let profiles: RedisDict<Profile> = RedisDict::new(client, "profiles", 3600);
//! profiles.set("42", &profile).await?;
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Connection pool, typed command layer and named-client registry
//! - [`config`] - Configuration management and TOML parsing
//! - [`containers`] - Dictionary, set, sorted-set, list, group and counter caches
//! - [`geo`] - Geospatial index with distance and radius queries
//! - [`limiter`] - Token-bucket rate limiter
//! - [`probabilistic`] - HyperLogLog and Bloom filter wrappers

/// Connection pool, typed command layer and named-client registry.
///
/// Contains the bounded connection pool with RAII leases, the `RedisClient`
/// command surface (native and `_packed` families), the pluggable value
/// codecs and the registry resolving configured client names at startup.
pub mod client;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Each named client carries its own host, credentials, timeouts and pool
/// bounds.
pub mod config;

/// Composite cache containers.
///
/// Dictionary, set, sorted-set and list shaped containers over packed values,
/// plus grouped time-window and FIFO caches with retention policies and the
/// hash-backed and daily counters.
pub mod containers;

/// Geospatial index module.
///
/// Named collections of (longitude, latitude, member) entries supporting
/// distance computation, position lookup and radius searches with unit
/// conversion.
pub mod geo;

/// Token-bucket rate limiter module.
///
/// Admission control keyed by an identifier, refilled continuously at a
/// configured rate, evaluated atomically server-side.
pub mod limiter;

/// Logging setup utilities.
///
/// Console logging via fern, driven by the configured log level.
pub mod logging;

/// Probabilistic structures module.
///
/// HyperLogLog cardinality estimation and Bloom-filter membership, both
/// carrying bounded statistical error by design.
pub mod probabilistic;

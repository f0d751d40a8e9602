//! Rate limiter implementation blocks.

/// Rate spec parsing.
pub mod rate;

/// The scripted token bucket.
pub mod rate_limiter;

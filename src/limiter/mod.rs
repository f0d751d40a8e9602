//! Token-bucket rate limiter module.
//!
//! A `RateLimiter` guards an identifier with a bucket of `capacity` tokens,
//! refilled continuously at the rate given by a spec string such as `"5/1s"`
//! or `"100/m"` (count per multiplier and unit, unit one of s/m/h/d).
//!
//! The refill-and-decrement step runs as one server-side script, so
//! concurrent callers can never jointly overdraw a bucket: each call either
//! admits and takes its tokens, or reports how long until the requested
//! tokens accrue. Idle buckets refill lazily from elapsed time; there is no
//! background timer.
//!
//! Because the bucket starts full, a cold key admits a burst of up to
//! `capacity` before throttling kicks in. Size `capacity` for the burst a
//! scenario may absorb, and the rate for its steady state.

/// Rate spec, decision and limiter structures.
pub mod structs;

/// Parsing and the scripted token bucket.
pub mod impls;

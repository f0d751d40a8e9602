//! Rate limiter structures.

/// Parsed rate spec.
pub mod rate;

/// Outcome of an acquire call.
pub mod rate_decision;

/// Token-bucket limiter over one key.
pub mod rate_limiter;

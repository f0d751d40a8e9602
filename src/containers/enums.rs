//! Container enumerations.

/// Retention policy for time-windowed group caches.
pub mod retention_policy;

//! Geo index operations.

/// Add, distance, position and radius queries.
pub mod geo_index;

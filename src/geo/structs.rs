//! Geo index structures.

/// Named geospatial index over a Redis geo key.
pub mod geo_index;

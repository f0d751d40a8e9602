//! Probabilistic structure definitions.

/// Bloom-filter membership structure.
pub mod bloom_filter;

/// HyperLogLog cardinality estimator.
pub mod hyper_log_log;

//! Probabilistic structure operations.

/// Bloom filter creation and membership operations.
pub mod bloom_filter;

/// HyperLogLog record, count and merge operations.
pub mod hyper_log_log;

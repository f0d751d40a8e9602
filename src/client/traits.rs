//! Trait definitions for the client layer.

/// Pluggable value serialization.
pub mod value_codec;

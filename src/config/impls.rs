//! Implementation blocks for configuration loading/saving.

/// Root configuration loading, saving and defaults.
pub mod configuration;

/// Display/Error impls for configuration errors.
pub mod configuration_error;

/// Connection URL construction and defaults for client configs.
pub mod redis_client_config;

//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the library
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: console log verbosity for binaries embedding the crate
//! - **clients**: one section per named Redis client, e.g. `[clients.default]`
//!   with host, port, database index, credentials, socket timeouts and pool
//!   bounds
//!
//! # Example
//!
//! ```rust,ignore
//! use redis_containers::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! let default_client = &config.clients["default"];
//! ```

/// Configuration enumerations (error kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

mod tests;

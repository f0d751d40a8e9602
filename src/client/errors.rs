use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Key too long ({length} bytes): {key}")]
    KeyTooLong { key: String, length: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("Unknown client: {0}")]
    UnknownClient(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::client::errors::CacheError;

/// Serialization scheme for values stored in Redis.
///
/// A codec is chosen once per container; mixing codecs on one key corrupts
/// the container's contents. Encoded payloads are opaque to Redis, so native
/// numeric commands (INCRBY, HINCRBY, ZINCRBY on raw members) must never be
/// pointed at fields written through a codec.
pub trait ValueCodec {
    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CacheError>;
    fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CacheError>;
}

/// MessagePack, the default wire format for packed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPack;

impl ValueCodec for MsgPack {
    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CacheError> {
        rmp_serde::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CacheError> {
        rmp_serde::from_slice(data).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

/// JSON codec for containers shared with consumers that cannot speak
/// MessagePack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ValueCodec for Json {
    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CacheError> {
        serde_json::from_slice(data).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

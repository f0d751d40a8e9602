use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RedisClientConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub password: Option<String>,
    /// Per-call response timeout. Bounds every command round-trip so a dead
    /// peer surfaces as an error instead of a hang.
    pub socket_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Upper bound on concurrently open connections per pool.
    pub max_connections: u32,
    /// Parked connections unused longer than this are reconnected on next
    /// lease; the server side drops idle links after roughly an hour.
    pub max_idle_secs: u64,
}

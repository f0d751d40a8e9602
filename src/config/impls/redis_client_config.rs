use crate::config::structs::redis_client_config::RedisClientConfig;

impl Default for RedisClientConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 6379,
            db: 0,
            password: None,
            socket_timeout_ms: 1000,
            connect_timeout_ms: 1000,
            max_connections: 50,
            max_idle_secs: 3500,
        }
    }
}

impl RedisClientConfig {
    /// Connection URL in the `redis://` scheme understood by the driver.
    pub fn connection_url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{}@{}:{}/{}", password, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

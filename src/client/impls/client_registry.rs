use std::collections::HashMap;
use log::info;
use crate::client::errors::CacheError;
use crate::client::structs::client_registry::ClientRegistry;
use crate::client::structs::redis_client::RedisClient;
use crate::config::structs::configuration::Configuration;

impl ClientRegistry {
    /// Builds and pings every configured client.
    ///
    /// Resolving all names up front means a typo'd client name or an
    /// unreachable endpoint fails at startup, not on first use deep inside a
    /// request handler.
    pub async fn connect(config: &Configuration) -> Result<ClientRegistry, CacheError> {
        let mut clients = HashMap::new();
        for (name, client_config) in &config.clients {
            let client = RedisClient::new(client_config.clone())?;
            client.ping().await?;
            info!("[Registry] Connected client '{}' to Redis at {}:{}", name, client_config.host, client_config.port);
            clients.insert(name.clone(), client);
        }
        Ok(ClientRegistry { clients })
    }

    pub fn get(&self, name: &str) -> Result<&RedisClient, CacheError> {
        self.clients.get(name).ok_or_else(|| CacheError::UnknownClient(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.clients.keys().map(String::as_str).collect()
    }

    /// Closes every client's pool. Leases already handed out keep working;
    /// new leases fail with a connection error.
    pub fn shutdown(&self) {
        for (name, client) in &self.clients {
            info!("[Registry] Closing client '{}'", name);
            client.pool().close();
        }
    }
}

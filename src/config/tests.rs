#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_has_default_client() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert!(config.clients.contains_key("default"));
        }

        #[test]
        fn test_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.log_level, config.log_level);
            assert_eq!(parsed.clients.len(), config.clients.len());
            assert_eq!(parsed.clients["default"].port, 6379);
        }

        #[test]
        fn test_load_parses_client_sections() {
            let data = br#"
log_level = "debug"

[clients.default]
host = "10.0.0.5"
port = 6380
db = 2
socket_timeout_ms = 500
connect_timeout_ms = 500
max_connections = 10
max_idle_secs = 3500

[clients.persist]
host = "10.0.0.6"
port = 6379
db = 0
password = "hunter2"
socket_timeout_ms = 1000
connect_timeout_ms = 1000
max_connections = 50
max_idle_secs = 3500
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.clients.len(), 2);
            assert_eq!(config.clients["default"].host, "10.0.0.5");
            assert_eq!(config.clients["default"].db, 2);
            assert_eq!(config.clients["persist"].password.as_deref(), Some("hunter2"));
        }

        #[test]
        fn test_load_rejects_garbage() {
            assert!(Configuration::load(b"log_level = [").is_err());
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let config = Configuration::init();
            Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.clients["default"].max_connections, 50);
        }
    }

    mod redis_client_config_tests {
        use crate::config::structs::redis_client_config::RedisClientConfig;

        #[test]
        fn test_default_timeouts_bounded() {
            let config = RedisClientConfig::default();
            assert_eq!(config.socket_timeout_ms, 1000);
            assert_eq!(config.connect_timeout_ms, 1000);
            assert_eq!(config.max_idle_secs, 3500);
        }

        #[test]
        fn test_connection_url_without_password() {
            let config = RedisClientConfig::default();
            assert_eq!(config.connection_url(), "redis://127.0.0.1:6379/0");
        }

        #[test]
        fn test_connection_url_with_password() {
            let config = RedisClientConfig {
                password: Some(String::from("secret")),
                db: 3,
                ..RedisClientConfig::default()
            };
            assert_eq!(config.connection_url(), "redis://:secret@127.0.0.1:6379/3");
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            assert_eq!(format!("{}", error), "missing");
        }
    }
}

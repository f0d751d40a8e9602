use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::redis_client_config::RedisClientConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let mut clients = BTreeMap::new();
        clients.insert(String::from("default"), RedisClientConfig::default());
        Configuration {
            log_level: String::from("info"),
            clients,
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads `config.toml` from the working directory.
    ///
    /// When the file is missing or corrupt and `create` is set, a default
    /// configuration is written out for the operator to edit; the load still
    /// fails so that nobody runs on accidental defaults.
    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file("config.toml") {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or request it with 'create' set.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).unwrap();
                match Configuration::save_file("config.toml", config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the config.toml in the root folder, exiting now...");
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        Err(e)
                    }
                }
            }
        }
    }
}

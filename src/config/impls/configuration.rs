use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_tls_setting::ClientTlsSetting;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::server_tls_setting::ServerTlsSetting;
use crate::config::structs::tls_setting::TlsSetting;
use std::fs::File;
use std::io::Write;
use std::time::Duration;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            client: Some(ClientTlsSetting {
                tls: TlsSetting {
                    ca_file: String::from("ca.pem"),
                    min_version: String::from("1.2"),
                    ..Default::default()
                },
                insecure: false,
                insecure_skip_verify: false,
                server_name_override: String::new(),
            }),
            server: Some(ServerTlsSetting {
                tls: TlsSetting {
                    cert_file: String::from("cert.pem"),
                    key_file: String::from("key.pem"),
                    min_version: String::from("1.2"),
                    reload_interval: Duration::from_secs(3600),
                    ..Default::default()
                },
                client_ca_file: String::new(),
                client_ca_file_reload: false,
            }),
        }
    }

    /// Parses TOML bytes. Input that is not valid UTF-8 is rejected rather
    /// than having paths silently rewritten.
    pub fn load(data: &[u8]) -> Result<Configuration, ConfigurationError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        toml::from_str(text).map_err(ConfigurationError::ParseError)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => match file.write_all(data.as_ref()) {
                Ok(_) => Ok(()),
                Err(e) => Err(ConfigurationError::IOError(e)),
            },
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config).map_err(ConfigurationError::EncodeError)?;
        Self::save_file(path, data)
    }

    /// Loads and validates `path`. When the file is missing or broken and
    /// `create` is set, a default file is written and `Created` is returned so
    /// the caller can stop and let the user edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);
                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");
                Self::save_from_config(&Configuration::init(), path)?;
                eprintln!("Please edit {} and start again, exiting now...", path);
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };
        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] Invalid configuration in {}: {}", path, error);
            return Err(error);
        }
        Ok(config)
    }

    /// Validates both sections without reading any certificate files.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(client) = &self.client {
            client
                .tls
                .validate()
                .map_err(|e| ConfigurationError::Invalid(String::from("client"), e))?;
        }
        if let Some(server) = &self.server {
            server
                .tls
                .validate()
                .map_err(|e| ConfigurationError::Invalid(String::from("server"), e))?;
        }
        Ok(())
    }
}

use crate::config::structs::client_tls_setting::ClientTlsSetting;
use crate::config::structs::server_tls_setting::ServerTlsSetting;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub client: Option<ClientTlsSetting>,
    pub server: Option<ServerTlsSetting>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            client: None,
            server: None,
        }
    }
}

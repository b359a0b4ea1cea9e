use crate::config::structs::tls_setting::TlsSetting;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServerTlsSetting {
    #[serde(flatten)]
    pub tls: TlsSetting,
    /// Enables mutual TLS: clients must present a certificate issued by one of these CAs.
    pub client_ca_file: String,
    pub client_ca_file_reload: bool,
}

use crate::config::structs::tls_setting::TlsSetting;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientTlsSetting {
    #[serde(flatten)]
    pub tls: TlsSetting,
    /// Without a `ca_file` this disables TLS altogether.
    pub insecure: bool,
    pub insecure_skip_verify: bool,
    pub server_name_override: String,
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TlsSetting {
    /// CA bundle. Clients verify the server against it, falling back to the
    /// bundled web roots when empty.
    pub ca_file: String,
    pub cert_file: String,
    pub key_file: String,
    /// Defaults to "1.2" when empty.
    pub min_version: String,
    /// Defaults to the newest supported version when empty.
    pub max_version: String,
    /// Zero never reloads the certificate and key.
    #[serde(with = "crate::config::duration")]
    pub reload_interval: Duration,
}

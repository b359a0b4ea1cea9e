use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::client_tls_context::ClientTlsContext;
use crate::tls::structs::identity_reloader::IdentityReloader;
use rustls::ClientConfig;
use rustls::pki_types::ServerName;
use std::sync::Arc;

impl std::fmt::Debug for ClientTlsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientTlsContext")
            .field("server_name_override", &self.server_name_override)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("identity", &self.identity)
            .field("min_version", &self.min_version)
            .field("max_version", &self.max_version)
            .finish()
    }
}

impl ClientTlsContext {
    pub fn config(&self) -> Arc<ClientConfig> {
        Arc::clone(&self.config)
    }

    /// The name to validate the server certificate against: the configured
    /// override when present, otherwise `host`.
    pub fn server_name(&self, host: &str) -> Result<ServerName<'static>, TlsConfigError> {
        let name = self.server_name_override.as_deref().unwrap_or(host);
        ServerName::try_from(name.to_string()).map_err(|_| TlsConfigError::InvalidServerName(name.to_string()))
    }

    pub fn server_name_override(&self) -> Option<&str> {
        self.server_name_override.as_deref()
    }

    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    pub fn identity(&self) -> Option<&Arc<IdentityReloader>> {
        self.identity.as_ref()
    }

    pub fn min_version(&self) -> TlsVersion {
        self.min_version
    }

    pub fn max_version(&self) -> TlsVersion {
        self.max_version
    }
}

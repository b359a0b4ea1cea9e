use crate::tls::enums::server_trust::ServerTrust;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::identity_reloader::IdentityReloader;
use crate::tls::structs::server_tls_context::ServerTlsContext;
use crate::tls::structs::trust_store_reloader::TrustStoreReloader;
use rustls::{RootCertStore, ServerConfig};
use std::sync::Arc;

impl std::fmt::Debug for ServerTlsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerTlsContext")
            .field("identity", &self.identity)
            .field("trust_store", &self.trust_store())
            .field("has_root_store", &self.root_store.is_some())
            .field("min_version", &self.min_version)
            .field("max_version", &self.max_version)
            .finish()
    }
}

impl ServerTlsContext {
    /// The config to accept the next connection with.
    ///
    /// With a client CA configured this follows the trust store, so a
    /// reloaded pool applies from the next handshake on.
    pub fn config(&self) -> Arc<ServerConfig> {
        match &self.trust {
            ServerTrust::Static(config) => Arc::clone(config),
            ServerTrust::Reloading(trust_store) => trust_store.current_trust_config(),
        }
    }

    pub fn requires_client_auth(&self) -> bool {
        matches!(self.trust, ServerTrust::Reloading(_))
    }

    pub fn trust_store(&self) -> Option<&Arc<TrustStoreReloader>> {
        match &self.trust {
            ServerTrust::Static(_) => None,
            ServerTrust::Reloading(trust_store) => Some(trust_store),
        }
    }

    pub fn identity(&self) -> Option<&Arc<IdentityReloader>> {
        self.identity.as_ref()
    }

    /// The pool loaded from `ca_file`; it is not used to verify clients.
    pub fn root_store(&self) -> Option<&Arc<RootCertStore>> {
        self.root_store.as_ref()
    }

    pub fn min_version(&self) -> TlsVersion {
        self.min_version
    }

    pub fn max_version(&self) -> TlsVersion {
        self.max_version
    }

    /// Stops the client CA watch task, if one is running.
    pub async fn shutdown(&self) {
        if let Some(trust_store) = self.trust_store() {
            trust_store.stop_watching().await;
        }
    }
}

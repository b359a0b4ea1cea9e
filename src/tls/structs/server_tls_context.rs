use crate::tls::enums::server_trust::ServerTrust;
use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::identity_reloader::IdentityReloader;
use rustls::RootCertStore;
use std::sync::Arc;

/// Ready-to-use TLS configuration for accepted connections.
pub struct ServerTlsContext {
    pub(crate) trust: ServerTrust,
    pub(crate) root_store: Option<Arc<RootCertStore>>,
    pub(crate) identity: Option<Arc<IdentityReloader>>,
    pub(crate) min_version: TlsVersion,
    pub(crate) max_version: TlsVersion,
}

use crate::tls::enums::tls_version::TlsVersion;
use crate::tls::structs::identity_reloader::IdentityReloader;
use rustls::ClientConfig;
use std::sync::Arc;

/// Ready-to-use TLS configuration for outgoing connections.
pub struct ClientTlsContext {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) server_name_override: Option<String>,
    pub(crate) insecure_skip_verify: bool,
    pub(crate) identity: Option<Arc<IdentityReloader>>,
    pub(crate) min_version: TlsVersion,
    pub(crate) max_version: TlsVersion,
}

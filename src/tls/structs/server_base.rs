use crate::tls::structs::identity_resolver::IdentityResolver;
use rustls::SupportedProtocolVersion;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// Everything a server config needs apart from client authentication.
#[derive(Debug, Clone)]
pub struct ServerBase {
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) versions: Vec<&'static SupportedProtocolVersion>,
    pub(crate) cert_resolver: Arc<IdentityResolver>,
}

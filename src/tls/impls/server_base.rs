use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::structs::identity_resolver::IdentityResolver;
use crate::tls::structs::server_base::ServerBase;
use rustls::crypto::CryptoProvider;
use rustls::server::WebPkiClientVerifier;
use rustls::{RootCertStore, ServerConfig, SupportedProtocolVersion};
use std::sync::Arc;

impl ServerBase {
    pub fn new(
        provider: Arc<CryptoProvider>,
        versions: Vec<&'static SupportedProtocolVersion>,
        cert_resolver: Arc<IdentityResolver>,
    ) -> Self {
        Self {
            provider,
            versions,
            cert_resolver,
        }
    }

    /// Builds a server config; with `client_roots` every client must present
    /// a certificate that chains to one of them.
    pub fn build_config(
        &self,
        client_roots: Option<Arc<RootCertStore>>,
    ) -> Result<ServerConfig, TlsConfigError> {
        let builder = ServerConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_protocol_versions(&self.versions)?;
        let config = match client_roots {
            Some(roots) => {
                let verifier = WebPkiClientVerifier::builder_with_provider(roots, Arc::clone(&self.provider))
                    .build()
                    .map_err(|e| TlsConfigError::Verifier(e.to_string()))?;
                builder
                    .with_client_cert_verifier(verifier)
                    .with_cert_resolver(self.cert_resolver.clone())
            }
            None => builder
                .with_no_client_auth()
                .with_cert_resolver(self.cert_resolver.clone()),
        };
        Ok(config)
    }

    pub fn cert_resolver(&self) -> &Arc<IdentityResolver> {
        &self.cert_resolver
    }
}

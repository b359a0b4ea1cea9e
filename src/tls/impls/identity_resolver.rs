use crate::tls::structs::identity_reloader::IdentityReloader;
use crate::tls::structs::identity_resolver::IdentityResolver;
use rustls::SignatureScheme;
use rustls::client::ResolvesClientCert;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl IdentityResolver {
    pub fn new(reloader: Option<Arc<IdentityReloader>>) -> Self {
        Self { reloader }
    }

    pub fn reloader(&self) -> Option<&Arc<IdentityReloader>> {
        self.reloader.as_ref()
    }

    /// A failed reload aborts the handshake; rustls reports it to the peer as a missing certificate.
    fn resolve_identity(&self) -> Option<Arc<CertifiedKey>> {
        let reloader = self.reloader.as_ref()?;
        match reloader.current_identity() {
            Ok(key) => Some(key),
            Err(e) => {
                log::error!("[IDENTITY] Refusing handshake: {}", e);
                None
            }
        }
    }
}

impl ResolvesServerCert for IdentityResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        if self.reloader.is_none() {
            log::warn!("[IDENTITY] No server certificate configured, handshake will fail");
        }
        self.resolve_identity()
    }
}

impl ResolvesClientCert for IdentityResolver {
    fn resolve(
        &self,
        _root_hint_subjects: &[&[u8]],
        _sigschemes: &[SignatureScheme],
    ) -> Option<Arc<CertifiedKey>> {
        self.resolve_identity()
    }

    fn has_certs(&self) -> bool {
        self.reloader.is_some()
    }
}

use rustls::pki_types::CertificateDer;
use rustls::{RootCertStore, ServerConfig};
use std::sync::Arc;

/// One immutable generation of the client CA pool and the server config derived from it.
pub struct TrustSnapshot {
    pub certs: Vec<CertificateDer<'static>>,
    pub roots: Arc<RootCertStore>,
    pub config: Arc<ServerConfig>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

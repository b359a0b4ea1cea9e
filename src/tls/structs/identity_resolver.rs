use crate::tls::structs::identity_reloader::IdentityReloader;
use std::sync::Arc;

/// Hands the current identity to rustls on every handshake.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    pub(crate) reloader: Option<Arc<IdentityReloader>>,
}

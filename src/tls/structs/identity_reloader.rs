use crate::tls::structs::identity_snapshot::IdentitySnapshot;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;
use std::time::Duration;

/// Serves a certificate and key pair, re-reading both files once
/// `reload_interval` has elapsed since the last successful load.
pub struct IdentityReloader {
    pub(crate) cert_path: String,
    pub(crate) key_path: String,
    pub(crate) reload_interval: Duration,
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) snapshot: ArcSwap<IdentitySnapshot>,
    pub(crate) reload_lock: Mutex<()>,
}

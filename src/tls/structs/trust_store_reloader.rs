use crate::tls::structs::trust_store_state::TrustStoreState;
use crate::tls::structs::trust_store_watch::TrustStoreWatch;
use parking_lot::Mutex;
use std::sync::Arc;

/// Holds the client CA pool for mutual TLS, optionally following changes to the CA file.
pub struct TrustStoreReloader {
    pub(crate) state: Arc<TrustStoreState>,
    pub(crate) watch: Mutex<Option<TrustStoreWatch>>,
}

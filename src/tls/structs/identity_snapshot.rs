use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::Instant;

/// One immutable generation of a loaded identity.
pub struct IdentitySnapshot {
    pub key: Arc<CertifiedKey>,
    pub next_reload: Option<Instant>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

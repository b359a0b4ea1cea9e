use crate::tls::structs::identity_snapshot::IdentitySnapshot;
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::{Duration, Instant};

impl IdentitySnapshot {
    /// A zero interval never schedules a reload.
    pub fn new(key: Arc<CertifiedKey>, loaded: Instant, reload_interval: Duration) -> Self {
        let next_reload = if reload_interval.is_zero() {
            None
        } else {
            loaded.checked_add(reload_interval)
        };
        Self {
            key,
            next_reload,
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_reload.is_some_and(|next_reload| now >= next_reload)
    }
}

impl std::fmt::Debug for IdentitySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySnapshot")
            .field("certs_count", &self.key.cert.len())
            .field("next_reload", &self.next_reload)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

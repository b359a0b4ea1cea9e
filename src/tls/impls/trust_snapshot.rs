use crate::tls::structs::trust_snapshot::TrustSnapshot;

impl std::fmt::Debug for TrustSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustSnapshot")
            .field("certs_count", &self.certs.len())
            .field("roots_count", &self.roots.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

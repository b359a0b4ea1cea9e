/// Outcome of a client CA re-read, broadcast to subscribers of a
/// [`TrustStoreReloader`](crate::tls::structs::trust_store_reloader::TrustStoreReloader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustStoreEvent {
    Reloaded { path: String, certificates: usize },
    Unchanged { path: String },
    ReloadFailed { path: String, error: String },
}

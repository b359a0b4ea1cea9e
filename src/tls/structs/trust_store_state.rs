use crate::tls::enums::trust_store_event::TrustStoreEvent;
use crate::tls::structs::server_base::ServerBase;
use crate::tls::structs::trust_snapshot::TrustSnapshot;
use arc_swap::ArcSwap;
use tokio::sync::broadcast;

/// State shared between a [`TrustStoreReloader`](crate::tls::structs::trust_store_reloader::TrustStoreReloader)
/// and its watch task.
pub struct TrustStoreState {
    pub(crate) ca_path: String,
    pub(crate) base: ServerBase,
    pub(crate) snapshot: ArcSwap<TrustSnapshot>,
    pub(crate) events: broadcast::Sender<TrustStoreEvent>,
}

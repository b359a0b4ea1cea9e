use crate::tls::structs::trust_store_reloader::TrustStoreReloader;
use rustls::ServerConfig;
use std::sync::Arc;

/// Where a server context takes its config from.
pub enum ServerTrust {
    /// No client authentication; the config never changes.
    Static(Arc<ServerConfig>),
    /// Mutual TLS; the config follows the client CA pool.
    Reloading(Arc<TrustStoreReloader>),
}

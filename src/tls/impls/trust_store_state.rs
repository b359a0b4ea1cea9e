use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::trust_store_event::TrustStoreEvent;
use crate::tls::pem::load_root_store;
use crate::tls::structs::server_base::ServerBase;
use crate::tls::structs::trust_snapshot::TrustSnapshot;
use crate::tls::structs::trust_store_state::TrustStoreState;
use arc_swap::ArcSwap;
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

impl TrustStoreState {
    pub fn new(ca_path: &str, base: ServerBase) -> Result<Self, TlsConfigError> {
        let (certs, roots) = load_root_store(ca_path).map_err(|source| TlsConfigError::TrustStoreLoad {
            path: ca_path.to_string(),
            source,
        })?;
        let roots = Arc::new(roots);
        let config = Arc::new(base.build_config(Some(Arc::clone(&roots)))?);
        info!("[TRUSTSTORE] Loaded {} client CA certificates from {}", roots.len(), ca_path);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            ca_path: ca_path.to_string(),
            base,
            snapshot: ArcSwap::from_pointee(TrustSnapshot {
                certs,
                roots,
                config,
                loaded_at: chrono::Utc::now(),
            }),
            events,
        })
    }

    /// Re-reads the CA file and swaps in a new snapshot when its content changed.
    ///
    /// Returns whether the snapshot was replaced. On failure the previous
    /// snapshot stays in place and a [`TrustStoreEvent::ReloadFailed`] is broadcast.
    pub fn reload(&self) -> Result<bool, TlsConfigError> {
        match self.try_reload() {
            Ok(Some(certificates)) => {
                info!(
                    "[TRUSTSTORE] Reloaded {} client CA certificates from {}",
                    certificates, self.ca_path
                );
                self.publish(TrustStoreEvent::Reloaded {
                    path: self.ca_path.clone(),
                    certificates,
                });
                Ok(true)
            }
            Ok(None) => {
                debug!("[TRUSTSTORE] {} changed on disk but its certificates did not", self.ca_path);
                self.publish(TrustStoreEvent::Unchanged {
                    path: self.ca_path.clone(),
                });
                Ok(false)
            }
            Err(e) => {
                error!("[TRUSTSTORE] Keeping previous client CA pool: {}", e);
                self.publish(TrustStoreEvent::ReloadFailed {
                    path: self.ca_path.clone(),
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn try_reload(&self) -> Result<Option<usize>, TlsConfigError> {
        let (certs, roots) = load_root_store(&self.ca_path).map_err(|source| TlsConfigError::TrustStoreReload {
            path: self.ca_path.clone(),
            source,
        })?;
        if self.snapshot.load().certs == certs {
            return Ok(None);
        }
        let roots = Arc::new(roots);
        let config = Arc::new(self.base.build_config(Some(Arc::clone(&roots)))?);
        let certificates = roots.len();
        self.snapshot.store(Arc::new(TrustSnapshot {
            certs,
            roots,
            config,
            loaded_at: chrono::Utc::now(),
        }));
        Ok(Some(certificates))
    }

    fn publish(&self, event: TrustStoreEvent) {
        // No subscribers is fine; the log line already records the outcome.
        let _ = self.events.send(event);
    }
}

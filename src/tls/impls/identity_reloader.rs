use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::pem::load_certified_key;
use crate::tls::structs::identity_reloader::IdentityReloader;
use crate::tls::structs::identity_snapshot::IdentitySnapshot;
use arc_swap::ArcSwap;
use log::{info, warn};
use parking_lot::Mutex;
use rustls::crypto::CryptoProvider;
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::{Duration, Instant};

impl std::fmt::Debug for IdentityReloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityReloader")
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("reload_interval", &self.reload_interval)
            .field("snapshot", &self.snapshot.load_full())
            .finish()
    }
}

impl IdentityReloader {
    /// Loads the pair once; construction fails if that first load fails.
    pub fn new(
        cert_path: &str,
        key_path: &str,
        reload_interval: Duration,
        provider: Arc<CryptoProvider>,
    ) -> Result<Self, TlsConfigError> {
        let loaded = Instant::now();
        let key = load_certified_key(cert_path, key_path, &provider).map_err(|source| {
            TlsConfigError::CredentialLoad {
                cert: cert_path.to_string(),
                key: key_path.to_string(),
                source,
            }
        })?;
        info!(
            "[IDENTITY] Loaded certificate {} and key {} (reload interval: {:?})",
            cert_path, key_path, reload_interval
        );
        Ok(Self {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
            reload_interval,
            provider,
            snapshot: ArcSwap::from_pointee(IdentitySnapshot::new(Arc::new(key), loaded, reload_interval)),
            reload_lock: Mutex::new(()),
        })
    }

    /// Returns the cached identity, re-reading the files first when a reload is due.
    ///
    /// Readers that find no reload due never take a lock. When one is due the
    /// caller serialises on the reload lock and re-checks, so a burst of
    /// handshakes at the deadline usually performs a single read. A failed
    /// read is returned as [`TlsConfigError::CredentialReload`]; the cached
    /// identity and its deadline are left alone so the next caller retries.
    pub fn current_identity(&self) -> Result<Arc<CertifiedKey>, TlsConfigError> {
        let now = Instant::now();
        {
            let snapshot = self.snapshot.load();
            if !snapshot.is_due(now) {
                return Ok(Arc::clone(&snapshot.key));
            }
        }
        let _guard = self.reload_lock.lock();
        let snapshot = self.snapshot.load_full();
        if !snapshot.is_due(now) {
            return Ok(Arc::clone(&snapshot.key));
        }
        self.reload_locked(now)
    }

    /// Re-reads the pair immediately, regardless of the interval.
    pub fn reload(&self) -> Result<Arc<CertifiedKey>, TlsConfigError> {
        let _guard = self.reload_lock.lock();
        self.reload_locked(Instant::now())
    }

    fn reload_locked(&self, now: Instant) -> Result<Arc<CertifiedKey>, TlsConfigError> {
        match load_certified_key(&self.cert_path, &self.key_path, &self.provider) {
            Ok(key) => {
                let key = Arc::new(key);
                self.snapshot.store(Arc::new(IdentitySnapshot::new(
                    Arc::clone(&key),
                    now,
                    self.reload_interval,
                )));
                info!("[IDENTITY] Reloaded certificate {} and key {}", self.cert_path, self.key_path);
                Ok(key)
            }
            Err(source) => {
                warn!(
                    "[IDENTITY] Reloading certificate {} and key {} failed: {}",
                    self.cert_path, self.key_path, source
                );
                Err(TlsConfigError::CredentialReload {
                    cert: self.cert_path.clone(),
                    key: self.key_path.clone(),
                    source,
                })
            }
        }
    }

    /// The cached identity, without checking whether a reload is due.
    pub fn cached_identity(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.snapshot.load().key)
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.snapshot.load().loaded_at
    }

    pub fn next_reload(&self) -> Option<Instant> {
        self.snapshot.load().next_reload
    }

    pub fn cert_path(&self) -> &str {
        &self.cert_path
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    pub fn reload_interval(&self) -> Duration {
        self.reload_interval
    }
}

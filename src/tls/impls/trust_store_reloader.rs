use crate::tls::enums::tls_error::TlsConfigError;
use crate::tls::enums::trust_store_event::TrustStoreEvent;
use crate::tls::structs::server_base::ServerBase;
use crate::tls::structs::trust_store_reloader::TrustStoreReloader;
use crate::tls::structs::trust_store_state::TrustStoreState;
use crate::tls::structs::trust_store_watch::TrustStoreWatch;
use log::{info, warn};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use parking_lot::Mutex;
use rustls::{RootCertStore, ServerConfig};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};

impl std::fmt::Debug for TrustStoreReloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustStoreReloader")
            .field("ca_path", &self.state.ca_path)
            .field("snapshot", &self.state.snapshot.load_full())
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl TrustStoreReloader {
    /// Loads the client CA file; construction fails if that first load fails.
    pub fn new(ca_path: &str, base: ServerBase) -> Result<Self, TlsConfigError> {
        Ok(Self {
            state: Arc::new(TrustStoreState::new(ca_path, base)?),
            watch: Mutex::new(None),
        })
    }

    /// The server config to use for the next accepted connection.
    ///
    /// It requires and verifies client certificates against the current pool.
    /// A config already handed to an in-flight handshake is never mutated.
    pub fn current_trust_config(&self) -> Arc<ServerConfig> {
        Arc::clone(&self.state.snapshot.load().config)
    }

    pub fn trust_pool(&self) -> Arc<RootCertStore> {
        Arc::clone(&self.state.snapshot.load().roots)
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.state.snapshot.load().loaded_at
    }

    pub fn ca_path(&self) -> &str {
        &self.state.ca_path
    }

    /// Re-reads the CA file now. A failure leaves the previous pool in place.
    pub fn reload(&self) -> Result<bool, TlsConfigError> {
        self.state.reload()
    }

    /// Receives an event after every re-read of the CA file, including failed ones.
    pub fn subscribe(&self) -> broadcast::Receiver<TrustStoreEvent> {
        self.state.events.subscribe()
    }

    pub fn is_watching(&self) -> bool {
        self.watch.lock().as_ref().is_some_and(|watch| !watch.task.is_finished())
    }

    /// Starts following the CA file for changes. Must be called within a tokio runtime.
    ///
    /// The directory holding the file is watched, so replacing the file by
    /// rename is picked up as well as writing it in place.
    pub fn start_watching(&self) -> Result<(), TlsConfigError> {
        let mut slot = self.watch.lock();
        if slot.is_some() {
            return Ok(());
        }
        let ca_path = self.state.ca_path.clone();
        let watch_error = |reason: String| TlsConfigError::Watch {
            path: ca_path.clone(),
            reason,
        };
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| watch_error(e.to_string()))?;
        let (directory, file_name) = split_watch_target(&ca_path).ok_or_else(|| watch_error("path has no file name".to_string()))?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<()>();
        let callback_path = ca_path.clone();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| match result {
            Ok(event) => {
                if is_relevant(&event, &file_name) {
                    let _ = event_tx.send(());
                }
            }
            Err(e) => warn!("[TRUSTSTORE] Watch error for {}: {}", callback_path, e),
        })
        .map_err(|e| watch_error(e.to_string()))?;
        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| watch_error(e.to_string()))?;

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let state = Arc::clone(&self.state);
        let task = runtime.spawn(async move {
            info!("[TRUSTSTORE] Watching {} for changes", state.ca_path);
            loop {
                tokio::select! {
                    event = event_rx.recv() => {
                        if event.is_none() {
                            break;
                        }
                        // Collapse a burst of events into a single re-read.
                        while event_rx.try_recv().is_ok() {}
                        let reload_state = Arc::clone(&state);
                        if let Err(e) = tokio::task::spawn_blocking(move || reload_state.reload()).await {
                            warn!("[TRUSTSTORE] Reload task for {} aborted: {}", state.ca_path, e);
                        }
                    }
                    _ = stop_rx.changed() => {
                        break;
                    }
                }
            }
            info!("[TRUSTSTORE] Stopped watching {}", state.ca_path);
        });

        *slot = Some(TrustStoreWatch {
            stop: stop_tx,
            task,
            watcher,
        });
        Ok(())
    }

    /// Stops the watch task and waits for it to exit.
    pub async fn stop_watching(&self) {
        let watch = self.watch.lock().take();
        let Some(TrustStoreWatch { stop, task, watcher }) = watch else {
            return;
        };
        let _ = stop.send(true);
        drop(watcher);
        if let Err(e) = task.await {
            warn!("[TRUSTSTORE] Watch task for {} ended abnormally: {}", self.state.ca_path, e);
        }
    }
}

impl Drop for TrustStoreReloader {
    fn drop(&mut self) {
        if let Some(watch) = self.watch.get_mut().take() {
            let _ = watch.stop.send(true);
        }
    }
}

fn split_watch_target(ca_path: &str) -> Option<(PathBuf, OsString)> {
    let path = Path::new(ca_path);
    let file_name = path.file_name()?.to_os_string();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((directory, file_name))
}

fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name.as_os_str()))
}

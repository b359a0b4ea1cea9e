use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle on a running client CA watch task.
pub struct TrustStoreWatch {
    pub(crate) stop: watch::Sender<bool>,
    pub(crate) task: JoinHandle<()>,
    pub(crate) watcher: notify::RecommendedWatcher,
}

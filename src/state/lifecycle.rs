//! Server lifecycle signalling.

use tokio::sync::broadcast;

/// Tracks whether the server is stopping and tells the listener once the
/// server actor has finished tearing down every session.
pub struct LifecycleManager {
    /// Fired once after teardown; the listener stops accepting.
    shutdown_tx: broadcast::Sender<()>,
    stopping: bool,
}

impl LifecycleManager {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(4);
        Self {
            shutdown_tx,
            stopping: false,
        }
    }

    /// Receiver that resolves once the server has stopped.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Mark the server as stopping. The actor exits after the current event.
    pub fn request_stop(&mut self) {
        self.stopping = true;
    }

    pub fn is_stopping(&self) -> bool {
        self.stopping
    }

    /// Wake every subscriber. No subscribers is not an error.
    pub fn notify_stopped(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

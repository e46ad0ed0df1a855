//! Stop coordination between the signal listener and the HTTP server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// One-shot stop switch shared by every clone.
///
/// The first [`trigger`](Shutdown::trigger) wakes all current subscribers;
/// later calls are no-ops.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    fired: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Receiver that resolves once the switch fires.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the switch. Returns `false` if it had already fired.
    pub fn trigger(&self) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        let listeners = self.tx.send(()).unwrap_or(0);
        tracing::debug!(listeners, "Shutdown triggered");
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_all_clones() {
        let shutdown = Shutdown::new();
        let mut server = shutdown.subscribe();
        let mut other = shutdown.clone().subscribe();

        assert!(shutdown.clone().trigger());
        assert!(server.recv().await.is_ok());
        assert!(other.recv().await.is_ok());
        assert!(shutdown.is_triggered());
    }

    #[test]
    fn test_second_trigger_is_noop() {
        let shutdown = Shutdown::default();
        assert!(shutdown.trigger());
        assert!(!shutdown.trigger());
    }
}

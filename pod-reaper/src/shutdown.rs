//! Cooperative shutdown shared between a signal listener and the reconciler.
//!
//! The trigger side is owned by whoever listens for termination requests,
//! the token side is handed to [`Reconciler::run`](crate::Reconciler::run).
//! Shutdown is observed at pass boundaries only, it never interrupts an
//! in-flight API call.

use std::future;

use tokio::sync::watch;

/// Create a connected trigger and token pair.
pub fn channel() -> (ShutdownTrigger, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, ShutdownToken { rx })
}

/// The writing half. Setting it is idempotent.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn shutdown(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Clone, Debug)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been requested.
    ///
    /// If the trigger is dropped without ever firing nobody can request
    /// shutdown anymore, so this never resolves.
    pub async fn wait(&mut self) {
        if self.is_shutdown() {
            return;
        }
        if self.rx.wait_for(|shutdown| *shutdown).await.is_err() {
            future::pending::<()>().await;
        }
    }
}

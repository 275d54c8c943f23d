use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::warn;

/// Shared cancellation flag for an in-flight lyrics search.
///
/// A search spans several network round trips; the user asking for a
/// different song (or hitting Ctrl+C) must abort mid-flight, and that abort
/// is reported distinctly from "lyrics not found".
#[derive(Clone, Default)]
pub struct SignalHandler {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    shutdown_requested: AtomicBool,
    notify: Notify,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.inner.shutdown_requested.load(Ordering::Acquire)
    }

    pub fn request_shutdown(&self) {
        self.inner.shutdown_requested.store(true, Ordering::Release);
        self.inner.notify.notify_waiters();
    }

    /// Resolve once shutdown has been requested. Safe to race with
    /// `request_shutdown`: the flag is re-checked after registering.
    pub async fn cancelled(&self) {
        loop {
            if self.is_shutdown_requested() {
                return;
            }
            let notified = self.inner.notify.notified();
            if self.is_shutdown_requested() {
                return;
            }
            notified.await;
        }
    }

    /// Trip the flag on SIGINT/SIGTERM.
    pub fn start_signal_monitoring(&self) -> tokio::task::JoinHandle<()> {
        let handler = self.clone();
        tokio::spawn(async move {
            #[cfg(unix)]
            {
                let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
                    .expect("Failed to create SIGTERM handler");
                tokio::select! {
                    _ = signal::ctrl_c() => warn!("Received interrupt signal"),
                    _ = sigterm.recv() => warn!("Received SIGTERM signal"),
                }
            }
            #[cfg(not(unix))]
            {
                let _ = signal::ctrl_c().await;
                warn!("Received interrupt signal");
            }
            handler.request_shutdown();
        })
    }
}

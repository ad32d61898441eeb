// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Notify,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Notify::new(),
        }
    }

    /// Wake the server loop for shutdown
    ///
    /// Uses `notify_one` so the request is kept if the loop is not waiting yet.
    pub fn request_shutdown(&self, reason: &str) {
        logger::log_info(&format!("{reason} received, initiating graceful shutdown"));
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Registration happens before the background task is spawned so failures
/// surface to the caller.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => handler.request_shutdown("SIGTERM"),
            _ = sigint.recv() => handler.request_shutdown("SIGINT"),
        }
    });
    Ok(())
}

/// Non-unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            handler.request_shutdown("Ctrl+C");
        }
    });
    Ok(())
}

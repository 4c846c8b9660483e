//! OS signal handling.
//!
//! # Responsibilities
//! - Register the Ctrl+C (SIGINT) handler
//! - Translate the signal into a shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The handler task owns a clone of the coordinator, so it outlives
//!   the caller's scope

use crate::lifecycle::shutdown::Shutdown;

/// Spawn a task that triggers `shutdown` when Ctrl+C is received.
pub fn spawn_signal_handler(shutdown: Shutdown) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            return;
        }
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });
}

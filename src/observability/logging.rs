//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level. Call once at startup; a second call panics, so
/// tests drive the library without it.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "authbench={log_level},tower_http={log_level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics crate)
//!
//! Consumers:
//!     → stdout (human-readable log lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG overrides the configured log level
//! - Metrics are cheap (atomic increments) and recorded per handler
//! - Request IDs flow through the tower middleware stack

pub mod logging;
pub mod metrics;

//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGINT/Ctrl+C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is cooperative: the server drains in-flight requests

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

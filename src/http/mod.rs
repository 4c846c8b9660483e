//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → handlers.rs (/auth, /newUser, /multi, fallback)
//!     → status + text/plain body to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BenchConfig (validated, immutable)
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reload
//! - All fields have defaults so a missing or minimal config still boots
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every violation, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::BenchConfig;
pub use schema::ListenerConfig;
pub use schema::PayloadConfig;

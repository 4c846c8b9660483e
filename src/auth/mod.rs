//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! GET /newUser?username=..&password=..
//!     → registry.rs (sanitize username, uniqueness check)
//!     → cipher.rs (obfuscate password)
//!     → stored as username → rot47(password)
//!
//! GET /auth?username=..&password=..
//!     → registry.rs (sanitize username, lookup)
//!     → cipher.rs (obfuscate supplied password, compare)
//!     → authorization counter incremented on success
//! ```
//!
//! # Design Decisions
//! - Sanitization runs identically on both paths so the same raw
//!   username always resolves to the same key
//! - ROT47 obfuscation keeps stored passwords from casual inspection;
//!   it is not a security mechanism
//! - Registration never overwrites an existing user

pub mod cipher;
pub mod registry;

pub use registry::{RegistryError, UserRegistry};

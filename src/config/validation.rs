//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: BenchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::BenchConfig;

/// A single semantic violation found in a config.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    EmptyBaseText,
    ZeroBaseRepeat,
    ZeroMaxMultiplier,
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address `{}` is not a valid socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address `{}` is not a valid socket address", addr)
            }
            ValidationError::EmptyBaseText => write!(f, "payload.base_text must not be empty"),
            ValidationError::ZeroBaseRepeat => write!(f, "payload.base_repeat must be at least 1"),
            ValidationError::ZeroMaxMultiplier => {
                write!(f, "payload.max_multiplier must be at least 1")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be at least 1")
            }
        }
    }
}

/// Check a parsed config for semantic violations, collecting every error.
pub fn validate_config(config: &BenchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }
    if config.payload.base_text.is_empty() {
        errors.push(ValidationError::EmptyBaseText);
    }
    if config.payload.base_repeat == 0 {
        errors.push(ValidationError::ZeroBaseRepeat);
    }
    if config.payload.max_multiplier == 0 {
        errors.push(ValidationError::ZeroMaxMultiplier);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

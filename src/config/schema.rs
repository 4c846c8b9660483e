//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! benchmark server. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the benchmark server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// User registry settings.
    pub registry: RegistryConfig,

    /// Synthetic load payload settings.
    pub payload: PayloadConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// User registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of randomly generated users inserted at startup, so
    /// authentication benchmarks run against a populated map.
    pub seed_users: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { seed_users: 0 }
    }
}

/// Synthetic load payload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Text unit the payload is built from.
    pub base_text: String,

    /// How many times `base_text` is repeated to form the base payload.
    pub base_repeat: usize,

    /// Largest multiplier `/multi` will serve. Requests above this are
    /// rejected with 413 before any allocation happens.
    pub max_multiplier: usize,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            base_text: "This is a simple dummy load that is meant to generate some load"
                .to_string(),
            base_repeat: 10,
            max_multiplier: 10_000,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_service() {
        let config = BenchConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.registry.seed_users, 0);
        assert_eq!(config.payload.base_repeat, 10);
        assert_eq!(config.payload.base_text.len(), 63);
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: BenchConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.payload.max_multiplier, 10_000);
        assert_eq!(config.timeouts.request_secs, 30);
    }
}

//! Synthetic load payload generation.
//!
//! # Responsibilities
//! - Build a size-parameterized response body on demand
//! - Enforce the configured multiplier cap before allocating
//!
//! # Design Decisions
//! - The base string is assembled once at construction; `generate` is
//!   pure and deterministic after that
//! - Requests above `max_multiplier` are rejected outright rather than
//!   attempted, closing the unbounded-allocation hole

use thiserror::Error;

use crate::config::schema::PayloadConfig;

/// Errors produced when a load payload cannot be generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// Multiplier missing, unparseable, or not positive.
    #[error("multiplier must be a positive integer")]
    InvalidMultiplier,

    /// Multiplier exceeds the configured maximum.
    #[error("multiplier {requested} exceeds maximum {max}")]
    TooLarge { requested: usize, max: usize },
}

/// Builder for synthetic response payloads.
pub struct LoadPayload {
    base: String,
    max_multiplier: usize,
}

impl LoadPayload {
    pub fn new(base_text: &str, base_repeat: usize, max_multiplier: usize) -> Self {
        Self {
            base: base_text.repeat(base_repeat),
            max_multiplier,
        }
    }

    pub fn from_config(config: &PayloadConfig) -> Self {
        Self::new(&config.base_text, config.base_repeat, config.max_multiplier)
    }

    /// Length in bytes of the repeated base unit.
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    pub fn max_multiplier(&self) -> usize {
        self.max_multiplier
    }

    /// Produce the base string repeated `multiplier` times.
    ///
    /// Output length is exactly `multiplier * base_len()`.
    pub fn generate(&self, multiplier: usize) -> Result<String, PayloadError> {
        if multiplier == 0 {
            return Err(PayloadError::InvalidMultiplier);
        }
        if multiplier > self.max_multiplier {
            return Err(PayloadError::TooLarge {
                requested: multiplier,
                max: self.max_multiplier,
            });
        }
        Ok(self.base.repeat(multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_repeats_base() {
        let payload = LoadPayload::new("ab", 1, 100);
        assert_eq!(payload.generate(3).unwrap(), "ababab");
        assert_eq!(payload.generate(1).unwrap(), "ab");
    }

    #[test]
    fn test_base_repeat_precomputed() {
        let payload = LoadPayload::new("xy", 3, 100);
        assert_eq!(payload.base_len(), 6);
        assert_eq!(payload.generate(2).unwrap(), "xyxyxyxyxyxy");
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let payload = LoadPayload::new("ab", 1, 100);
        assert_eq!(payload.generate(0), Err(PayloadError::InvalidMultiplier));
    }

    #[test]
    fn test_cap_enforced() {
        let payload = LoadPayload::new("ab", 1, 4);
        assert!(payload.generate(4).is_ok());
        assert_eq!(
            payload.generate(5),
            Err(PayloadError::TooLarge {
                requested: 5,
                max: 4
            })
        );
    }

    #[test]
    fn test_output_length() {
        let payload = LoadPayload::from_config(&PayloadConfig::default());
        let body = payload.generate(3).unwrap();
        assert_eq!(body.len(), 3 * payload.base_len());
    }
}

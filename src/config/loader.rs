//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::BenchConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BenchConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BenchConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise fall back to defaults.
///
/// Defaults still pass validation, so the returned config is always
/// usable.
pub fn load_or_default(path: Option<&Path>) -> Result<BenchConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(BenchConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }
}

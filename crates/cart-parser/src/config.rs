//! Command-line configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Flags passed on the command line override what is loaded here.

use std::env;

use crate::report::OutputFormat;

/// Default tracing filter when nothing is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for the `cart-parser` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Report format (`CART_PARSER_FORMAT`, default `text`)
    pub format: OutputFormat,

    /// Tracing filter directive (`CART_PARSER_LOG`, then `RUST_LOG`)
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = match lookup("CART_PARSER_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("CART_PARSER_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(CliConfig { format, log_filter })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_values() {
        let config = CliConfig::load_from(lookup(&[
            ("CART_PARSER_FORMAT", "json"),
            ("CART_PARSER_LOG", "debug"),
            ("RUST_LOG", "trace"),
        ]))
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = CliConfig::load_from(lookup(&[("RUST_LOG", "info")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_format() {
        let err = CliConfig::load_from(lookup(&[("CART_PARSER_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CART_PARSER_FORMAT");
    }
}

//! Environment Configuration Helpers
//!
//! Thin typed accessors over process environment variables. The binary
//! calls these once at startup; nothing reads the environment afterwards.

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(String),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: String, reason: String },
}

/// Read a variable that must be present and non-empty
pub fn required_env(name: &str) -> Result<String, ConfigError> {
    optional_env(name).ok_or_else(|| ConfigError::Missing(name.to_string()))
}

/// Read a variable, treating empty values as absent
pub fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub fn env_or(name: &str, default: &str) -> String {
    optional_env(name).unwrap_or_else(|| default.to_string())
}

/// Parse a variable into `T`, falling back to `default` when unset
pub fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_env_missing() {
        temp_env::with_var_unset("PLATFORM_TEST_MISSING", || {
            assert_eq!(
                required_env("PLATFORM_TEST_MISSING"),
                Err(ConfigError::Missing("PLATFORM_TEST_MISSING".to_string()))
            );
        });
    }

    #[test]
    fn test_empty_counts_as_missing() {
        temp_env::with_var("PLATFORM_TEST_EMPTY", Some("  "), || {
            assert!(optional_env("PLATFORM_TEST_EMPTY").is_none());
            assert_eq!(env_or("PLATFORM_TEST_EMPTY", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_parse_env() {
        temp_env::with_var("PLATFORM_TEST_PORT", Some("8080"), || {
            assert_eq!(parse_env::<u16>("PLATFORM_TEST_PORT", 5000), Ok(8080));
        });
        temp_env::with_var_unset("PLATFORM_TEST_PORT", || {
            assert_eq!(parse_env::<u16>("PLATFORM_TEST_PORT", 5000), Ok(5000));
        });
        temp_env::with_var("PLATFORM_TEST_PORT", Some("eighty"), || {
            assert!(matches!(
                parse_env::<u16>("PLATFORM_TEST_PORT", 5000),
                Err(ConfigError::Invalid { .. })
            ));
        });
    }
}

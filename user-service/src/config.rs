use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment, selects the log format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Other(String),
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "production" | "prod" => Environment::Production,
            _ => Environment::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Other(name) => name.as_str(),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            environment: Environment::Development,
            log_level: "info".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            request_timeout: Duration::from_secs(15),
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

// Unset and empty both fall back to the default
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(key) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(err) => Err(ConfigError::InvalidValue {
                key,
                reason: err.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}

impl Config {
    /// Loads configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let allowed_origins = env_var("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            host: parse_var("HOST", defaults.host)?,
            port: parse_var("PORT", defaults.port)?,
            environment: env_var("ENVIRONMENT")
                .map(|raw| Environment::parse(&raw))
                .unwrap_or(defaults.environment),
            log_level: env_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            allowed_origins,
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            shutdown_timeout: Duration::from_secs(parse_var(
                "SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout.as_secs(),
            )?),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 7] = [
        "HOST",
        "PORT",
        "ENVIRONMENT",
        "LOG_LEVEL",
        "CORS_ALLOWED_ORIGINS",
        "REQUEST_TIMEOUT_SECS",
        "SHUTDOWN_TIMEOUT_SECS",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        KEYS.iter().map(|key| (*key, None)).collect()
    }

    // Starts from a clean slate so ambient variables (HOST in particular) don't leak in
    fn with_env<R>(overrides: &[(&'static str, &'static str)], f: impl FnOnce() -> R) -> R {
        let mut vars = unset_all();
        for (key, value) in overrides {
            vars.retain(|(k, _)| k != key);
            vars.push((*key, Some(*value)));
        }
        temp_env::with_vars(vars, f)
    }

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars(unset_all(), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
            assert_eq!(config.request_timeout, Duration::from_secs(15));
            assert_eq!(config.shutdown_timeout, Duration::from_secs(10));
            assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        with_env(&[("PORT", ""), ("LOG_LEVEL", ""), ("ENVIRONMENT", "")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.log_level, "info");
            assert_eq!(config.environment, Environment::Development);
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                ("HOST", "127.0.0.1"),
                ("PORT", "9090"),
                ("ENVIRONMENT", "production"),
                ("LOG_LEVEL", "debug"),
                ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
                ("REQUEST_TIMEOUT_SECS", "5"),
                ("SHUTDOWN_TIMEOUT_SECS", "3"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
                assert!(config.environment.is_production());
                assert_eq!(config.log_level, "debug");
                assert_eq!(
                    config.allowed_origins,
                    vec!["https://a.example", "https://b.example"]
                );
                assert_eq!(config.request_timeout, Duration::from_secs(5));
                assert_eq!(config.shutdown_timeout, Duration::from_secs(3));
            },
        );
    }

    #[test]
    fn test_unknown_environment_is_kept_verbatim() {
        with_env(&[("ENVIRONMENT", "staging")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.environment.as_str(), "staging");
            assert!(!config.environment.is_production());
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        with_env(&[("PORT", "eighty")], || {
            let err = Config::from_env().unwrap_err();
            let ConfigError::InvalidValue { key, value, .. } = err;
            assert_eq!(key, "PORT");
            assert_eq!(value, "eighty");
        });
    }
}

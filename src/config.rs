use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::rate_limiter::RateLimitConfig;

/// Service configuration, loaded from the environment with sensible
/// defaults. A `.env` file is honored when present (loaded in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_address: String,
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
    /// Number of mock employees seeded at startup
    pub seed_count: usize,
    /// Requests admitted per rate-limit window
    pub request_limit: u32,
    /// Rate-limit window length in seconds
    pub window_secs: u64,
    /// Backoff length in seconds once the limit is exceeded
    pub backoff_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            seed_count: 25,
            request_limit: 100,
            window_secs: 60,
            backoff_secs: 30,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            seed_count: parse_var("SEED_COUNT", defaults.seed_count)?,
            request_limit: parse_var("REQUEST_LIMIT", defaults.request_limit)?,
            window_secs: parse_var("WINDOW_SECS", defaults.window_secs)?,
            backoff_secs: parse_var("BACKOFF_SECS", defaults.backoff_secs)?,
        })
    }

    pub fn rate_limit(&self) -> RateLimitConfig {
        RateLimitConfig {
            max_requests: self.request_limit,
            window: Duration::from_secs(self.window_secs),
            backoff: Duration::from_secs(self.backoff_secs),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_unset() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.request_limit, 100);
        assert_eq!(config.rate_limit().window, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_var_reads_and_validates() {
        env::set_var("EMPLOYEE_DIRECTORY_TEST_LIMIT", "42");
        let value: u32 = parse_var("EMPLOYEE_DIRECTORY_TEST_LIMIT", 7).unwrap();
        assert_eq!(value, 42);

        env::set_var("EMPLOYEE_DIRECTORY_TEST_LIMIT", "not-a-number");
        let result: Result<u32, _> = parse_var("EMPLOYEE_DIRECTORY_TEST_LIMIT", 7);
        assert!(result.is_err());
        env::remove_var("EMPLOYEE_DIRECTORY_TEST_LIMIT");
    }

    #[test]
    fn test_parse_var_falls_back_to_default() {
        let value: u64 = parse_var("EMPLOYEE_DIRECTORY_TEST_UNSET", 30).unwrap();
        assert_eq!(value, 30);
    }
}

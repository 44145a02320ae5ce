//! # Service Configuration
//!
//! Environment-variable configuration read once at startup. Defaults
//! match a local development deployment; only the test-engine URL is
//! required, since the service cannot validate without it.

use thiserror::Error;

/// Service version reported by the health probe.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (`AASV_HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`AASV_PORT`, default `8000`).
    pub port: u16,
    /// Allowed CORS origins (`AASV_CORS_ORIGINS`, comma-separated,
    /// default `*`).
    pub cors_origins: Vec<String>,
    /// Upload size limit in MiB (`AASV_MAX_UPLOAD_MB`, default `50`).
    pub max_upload_mb: usize,
    /// Base URL of the compliance test-engine service
    /// (`AASV_CHECKER_URL`, required).
    pub checker_url: String,
    /// Per-request timeout for test-engine calls in seconds
    /// (`AASV_CHECKER_TIMEOUT_SECS`, default `60`).
    pub checker_timeout_secs: u64,
}

/// Error loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but unparseable.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Config {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let checker_url = std::env::var("AASV_CHECKER_URL")
            .map_err(|_| ConfigError::Missing("AASV_CHECKER_URL"))?;

        Ok(Self {
            host: env_or("AASV_HOST", "0.0.0.0"),
            port: parse_env("AASV_PORT", 8000)?,
            cors_origins: env_or("AASV_CORS_ORIGINS", "*")
                .split(',')
                .map(|origin| origin.trim().to_string())
                .collect(),
            max_upload_mb: parse_env("AASV_MAX_UPLOAD_MB", 50)?,
            checker_url,
            checker_timeout_secs: parse_env("AASV_CHECKER_TIMEOUT_SECS", 60)?,
        })
    }

    /// Configuration for a given test-engine URL with defaults everywhere
    /// else. Used by tests and embedders.
    pub fn with_checker_url(checker_url: impl Into<String>) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_upload_mb: 50,
            checker_url: checker_url.into(),
            checker_timeout_secs: 60,
        }
    }

    /// Upload body limit in bytes.
    pub fn body_limit_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

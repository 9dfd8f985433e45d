// ABOUTME: Environment configuration for the GainLog client
// ABOUTME: Parses API URL, data directory, timeout and user agent with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Environment-based configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::errors::{ApiError, ApiResult};

/// Environment variable names
pub mod env_config {
    /// API base URL
    pub const API_URL: &str = "GAINLOG_API_URL";
    /// Legacy API base URL, used when `GAINLOG_API_URL` is unset
    pub const API_URL_FALLBACK: &str = "API_URL";
    /// Directory for durable session storage
    pub const DATA_DIR: &str = "GAINLOG_DATA_DIR";
    /// Optional request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "GAINLOG_HTTP_TIMEOUT_SECS";
    /// Optional user agent override
    pub const USER_AGENT: &str = "GAINLOG_USER_AGENT";
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL of the API, e.g. `https://api.gainlog.app/api/v1`
    pub api_url: String,
    /// Directory holding the persisted session
    pub data_dir: PathBuf,
    /// Request timeout; `None` waits on transport defaults
    pub http_timeout: Option<Duration>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API URL and data directory
    #[must_use]
    pub fn new(api_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.into(),
            data_dir: data_dir.into(),
            http_timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is missing or invalid, or if the
    /// timeout is not a positive integer
    pub fn from_env() -> ApiResult<Self> {
        let api_url = env::var(env_config::API_URL)
            .or_else(|_| env::var(env_config::API_URL_FALLBACK))
            .map_err(|_| {
                ApiError::config(format!(
                    "{} environment variable is required",
                    env_config::API_URL
                ))
            })?;

        let data_dir = env::var(env_config::DATA_DIR)
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let http_timeout = match env::var(env_config::HTTP_TIMEOUT_SECS) {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                ApiError::config(format!(
                    "{} must be a whole number of seconds",
                    env_config::HTTP_TIMEOUT_SECS
                ))
            })?)),
            Err(_) => None,
        };

        let user_agent =
            env::var(env_config::USER_AGENT).unwrap_or_else(|_| default_user_agent());

        let config = Self {
            api_url,
            data_dir,
            http_timeout,
            user_agent,
        };
        config.validate()?;

        info!(
            api_url = %config.api_url,
            data_dir = %config.data_dir.display(),
            timeout_secs = ?config.http_timeout.map(|t| t.as_secs()),
            "Client configuration loaded"
        );

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> ApiResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ApiError::config(format!("Invalid API URL '{}': {e}", self.api_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.http_timeout == Some(Duration::ZERO) {
            return Err(ApiError::config("HTTP timeout must be greater than 0"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("User agent cannot be empty"));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("gainlog/{}", env!("CARGO_PKG_VERSION"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gainlog")
}

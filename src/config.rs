// ABOUTME: Client configuration loaded from environment variables with validated defaults
// ABOUTME: Base URL, HTTP timeout, and user agent for the GymTrack client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{env_config, service};
use crate::errors::{ClientError, ClientResult};

/// Configuration for the GymTrack client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are appended to it
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when a value fails validation.
    pub fn from_env() -> ClientResult<Self> {
        let config = Self {
            base_url: env_config::api_url(),
            timeout_secs: env_config::http_timeout_secs(),
            user_agent: service::USER_AGENT.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an empty or unparseable base
    /// URL or a zero timeout.
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::config("base URL cannot be empty"));
        }
        Url::parse(&self.base_url)
            .map_err(|err| ClientError::config(format!("invalid base URL: {err}")))?;
        if self.timeout_secs == 0 {
            return Err(ClientError::config("HTTP timeout must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::DEFAULT_API_URL.to_string(),
            timeout_secs: env_config::DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: service::USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config_validates() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "  ".into(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "not a url".into(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        std::env::set_var(env_config::API_URL_ENV, "https://api.example.com/v1");
        std::env::set_var(env_config::HTTP_TIMEOUT_ENV, "5");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.timeout_secs, 5);

        std::env::remove_var(env_config::API_URL_ENV);
        std::env::remove_var(env_config::HTTP_TIMEOUT_ENV);
    }

    #[test]
    #[serial]
    fn from_env_falls_back_to_defaults() {
        std::env::remove_var(env_config::API_URL_ENV);
        std::env::remove_var(env_config::HTTP_TIMEOUT_ENV);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, env_config::DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, env_config::DEFAULT_HTTP_TIMEOUT_SECS);
    }
}

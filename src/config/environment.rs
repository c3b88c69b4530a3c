// ABOUTME: Environment configuration for the prediction service client
// ABOUTME: Parses endpoint, timeouts, coercion policy, and deployment mode from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based client configuration

use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::constants::{defaults, env_vars};
use crate::errors::{ClientError, ClientResult};
use crate::form::CoercionPolicy;

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Environment named by `ENVIRONMENT`, development when unset
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_str_or_default(&env_var_or(env_vars::ENVIRONMENT, "development"))
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Prediction client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the prediction service, without the route path
    pub base_url: Url,
    /// Path of the prediction route
    pub predict_path: String,
    /// Whole-request timeout, also the bound on a submission's wait
    pub request_timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// How free-text numeric fields are coerced at submit time
    pub coercion: CoercionPolicy,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            predict_path: defaults::PREDICT_PATH.to_owned(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            coercion: CoercionPolicy::default(),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if a variable is set but cannot be parsed
    pub fn from_env() -> ClientResult<Self> {
        let base_url = parse_base_url(&env_var_or(env_vars::API_BASE_URL, defaults::API_BASE_URL))?;
        let predict_path = normalize_path(&env_var_or(env_vars::PREDICT_PATH, defaults::PREDICT_PATH));

        let request_timeout = Duration::from_secs(parse_secs(
            env_vars::REQUEST_TIMEOUT_SECS,
            defaults::REQUEST_TIMEOUT_SECS,
        )?);
        let connect_timeout = Duration::from_secs(parse_secs(
            env_vars::CONNECT_TIMEOUT_SECS,
            defaults::CONNECT_TIMEOUT_SECS,
        )?);

        let coercion = if parse_flag(&env_var_or(env_vars::LENIENT_COERCION, "false")) {
            CoercionPolicy::Lenient
        } else {
            CoercionPolicy::Strict
        };

        let environment = Environment::from_env();

        let config = Self {
            base_url,
            predict_path,
            request_timeout,
            connect_timeout,
            coercion,
            environment,
        };
        debug!(
            base_url = %config.base_url,
            predict_path = %config.predict_path,
            timeout_ms = config.request_timeout.as_millis() as u64,
            coercion = ?config.coercion,
            environment = %config.environment,
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Replace the base URL
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the URL is not an absolute http(s) URL
    pub fn with_base_url(mut self, base_url: &str) -> ClientResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the request timeout
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the timeout is zero
    pub fn with_request_timeout(mut self, timeout: Duration) -> ClientResult<Self> {
        if timeout.is_zero() {
            return Err(ClientError::Config(
                "request timeout must be greater than zero".to_owned(),
            ));
        }
        self.request_timeout = timeout;
        Ok(self)
    }

    /// Replace the coercion policy
    #[must_use]
    pub const fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }

    /// Full URL of the prediction route
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if base URL and path do not form a valid URL
    pub fn predict_url(&self) -> ClientResult<Url> {
        self.route_url(&self.predict_path)
    }

    /// Full URL of the liveness route
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if base URL and path do not form a valid URL
    pub fn health_url(&self) -> ClientResult<Url> {
        self.route_url(defaults::HEALTH_PATH)
    }

    // Appends to any path prefix on the base URL instead of replacing it.
    fn route_url(&self, path: &str) -> ClientResult<Url> {
        let joined = format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            normalize_path(path)
        );
        Url::parse(&joined).map_err(|e| ClientError::Config(format!("invalid route URL '{joined}': {e}")))
    }
}

#[allow(clippy::expect_used)] // Safe: constant URL literal
fn default_base_url() -> Url {
    Url::parse(defaults::API_BASE_URL).expect("default base URL is valid")
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ClientError::Config(format!("invalid base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ClientError::Config(format!(
            "unsupported base URL scheme '{scheme}', expected http or https"
        ))),
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_secs(key: &str, default: u64) -> ClientResult<u64> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(0) => Err(ClientError::Config(format!("{key} must be at least 1 second"))),
            Ok(secs) => Ok(secs),
            Err(e) => Err(ClientError::Config(format!("Invalid {key} value '{raw}': {e}"))),
        },
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_predict_url_keeps_base_path_prefix() {
        let config = ClientConfig::default()
            .with_base_url("https://nutrition.example.com/api/")
            .unwrap();
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "https://nutrition.example.com/api/predict"
        );
        assert_eq!(
            config.health_url().unwrap().as_str(),
            "https://nutrition.example.com/api/"
        );
    }

    #[test]
    fn test_default_predict_url() {
        let config = ClientConfig::default();
        assert_eq!(config.predict_url().unwrap().as_str(), "http://127.0.0.1:8000/predict");
        assert_eq!(config.coercion, CoercionPolicy::Strict);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::default().with_base_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = ClientConfig::default().with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("predict"), "/predict");
        assert_eq!(normalize_path(" /v2/predict "), "/v2/predict");
    }
}

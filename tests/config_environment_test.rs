// ABOUTME: Tests for client configuration loaded from environment variables
// ABOUTME: Defaults, overrides, and rejection of unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use nutrition_client::config::{ClientConfig, Environment};
use nutrition_client::constants::env_vars;
use nutrition_client::errors::ClientError;
use nutrition_client::form::CoercionPolicy;
use nutrition_client::logging::LoggingConfig;
use serial_test::serial;

const ALL_VARS: [&str; 7] = [
    env_vars::API_BASE_URL,
    env_vars::PREDICT_PATH,
    env_vars::REQUEST_TIMEOUT_SECS,
    env_vars::CONNECT_TIMEOUT_SECS,
    env_vars::LENIENT_COERCION,
    env_vars::ENVIRONMENT,
    "LOG_INCLUDE_LOCATION",
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(
        config.predict_url().unwrap().as_str(),
        "http://127.0.0.1:8000/predict"
    );
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "https://nutrition.example.com");
    env::set_var(env_vars::PREDICT_PATH, "v2/predict");
    env::set_var(env_vars::REQUEST_TIMEOUT_SECS, "30");
    env::set_var(env_vars::CONNECT_TIMEOUT_SECS, "2");
    env::set_var(env_vars::LENIENT_COERCION, "true");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.predict_url().unwrap().as_str(),
        "https://nutrition.example.com/v2/predict"
    );
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(2));
    assert_eq!(config.coercion, CoercionPolicy::Lenient);
    assert_eq!(config.environment, Environment::Production);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    clear_env();
    env::set_var(env_vars::REQUEST_TIMEOUT_SECS, "soon");
    let err = ClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));

    env::set_var(env_vars::REQUEST_TIMEOUT_SECS, "0");
    let err = ClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));

    env::remove_var(env_vars::REQUEST_TIMEOUT_SECS);
    env::set_var(env_vars::API_BASE_URL, "localhost:8000");
    let err = ClientConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn test_zero_request_timeout_is_rejected() {
    let err = ClientConfig::default()
        .with_request_timeout(Duration::ZERO)
        .unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));

    let config = ClientConfig::default()
        .with_request_timeout(Duration::from_millis(250))
        .unwrap();
    assert_eq!(config.request_timeout, Duration::from_millis(250));
}

#[test]
#[serial]
fn test_environment_alias_agrees_between_config_and_logging() {
    clear_env();
    env::set_var(env_vars::ENVIRONMENT, "prod");

    let config = ClientConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(logging.environment, Environment::Production);
    assert!(logging.include_location);
}

#[test]
#[serial]
fn test_logging_defaults_to_development() {
    clear_env();

    let logging = LoggingConfig::from_env();
    assert_eq!(logging.environment, Environment::Development);
    assert!(!logging.include_location);
}

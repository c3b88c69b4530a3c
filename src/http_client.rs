// ABOUTME: HTTP client construction for prediction service calls
// ABOUTME: Applies configured request and connect timeouts plus the client user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};

use crate::config::ClientConfig;
use crate::constants::service_names;
use crate::errors::{ClientError, ClientResult};

/// Build the HTTP client used for one prediction service
///
/// Connection pooling is per client, so callers build one and reuse it for
/// every submission.
///
/// # Errors
///
/// Returns `ClientError::Config` if the TLS backend cannot be initialized
pub fn build_client(config: &ClientConfig) -> ClientResult<Client> {
    ClientBuilder::new()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(format!(
            "{}/{}",
            service_names::NUTRITION_CLIENT,
            service_names::VERSION
        ))
        .build()
        .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))
}

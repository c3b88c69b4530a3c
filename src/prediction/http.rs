// ABOUTME: HTTP client for the nutrition prediction service REST API
// ABOUTME: Posts JSON prediction requests and maps transport, status, and decode failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::PredictionService;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::http_client::build_client;
use crate::models::{HealthStatus, PredictionRequest, PredictionResult};

/// Prediction service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    predict_url: Url,
    health_url: Url,
    timeout: Duration,
}

impl HttpPredictionClient {
    /// Create a client for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the route URLs are invalid or the
    /// HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            predict_url: config.predict_url()?,
            health_url: config.health_url()?,
            timeout: config.request_timeout,
        })
    }

    /// Full URL of the prediction route
    #[must_use]
    pub const fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    fn transport_error(&self, error: &reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ClientError::Network(error.to_string())
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: server_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    fn endpoint(&self) -> String {
        self.predict_url.to_string()
    }

    async fn predict(&self, request: &PredictionRequest) -> ClientResult<PredictionResult> {
        debug!(
            http.url = %self.predict_url,
            body = %serde_json::to_string(request).unwrap_or_default(),
            "POST prediction request"
        );

        let response = self
            .client
            .post(self.predict_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.read_json(response).await
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.read_json(response).await
    }
}

/// Human-readable message for a non-success response
///
/// Prefers the `detail` field the service uses for its error bodies, then
/// the raw body, then the status reason.
fn server_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => trimmed.to_owned(),
        },
        _ => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_prefers_detail() {
        assert_eq!(
            server_message(StatusCode::UNAUTHORIZED, r#"{"detail":"Not authenticated"}"#),
            "Not authenticated"
        );
        assert_eq!(
            server_message(
                StatusCode::UNPROCESSABLE_ENTITY,
                r#"{"detail":[{"loc":["body","age"],"msg":"field required"}]}"#
            ),
            r#"[{"loc":["body","age"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_server_message_falls_back_to_body_then_reason() {
        assert_eq!(
            server_message(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "boom"
        );
        assert_eq!(
            server_message(StatusCode::SERVICE_UNAVAILABLE, "  "),
            "Service Unavailable"
        );
    }
}

// ABOUTME: Prediction service abstraction used by the form controller
// ABOUTME: Async trait seam with an HTTP implementation over reqwest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prediction Service
//!
//! The prediction model is an external collaborator. This module defines the
//! contract the client depends on and the HTTP transport that fulfils it.

/// HTTP transport for the prediction service
pub mod http;

pub use http::HttpPredictionClient;

use async_trait::async_trait;

use crate::errors::ClientResult;
use crate::models::{HealthStatus, PredictionRequest, PredictionResult};

/// Remote service that turns child attributes into a nutrition prediction
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Short description of where requests go, for logs
    fn endpoint(&self) -> String;

    /// Submit one prediction request
    ///
    /// # Errors
    ///
    /// Returns `Network`, `Timeout`, `Server`, or `Decode` errors
    async fn predict(&self, request: &PredictionRequest) -> ClientResult<PredictionResult>;

    /// Check that the service is up
    ///
    /// # Errors
    ///
    /// Returns `Network`, `Timeout`, `Server`, or `Decode` errors
    async fn health(&self) -> ClientResult<HealthStatus>;
}

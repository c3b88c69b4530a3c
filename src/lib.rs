// ABOUTME: Main library entry point for the child nutrition recommendation client
// ABOUTME: Form lifecycle, prediction API contract, result interpretation, and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Client
//!
//! Collects a child's age, gender, height, weight, and activity level,
//! submits them to a remote nutrition prediction service, and presents the
//! returned BMI, calorie classification, and per-meal food plan.
//!
//! ## Architecture
//!
//! - **Form**: single owner of the input, lifecycle, result, and error state
//! - **Prediction**: the `PredictionService` seam and its HTTP implementation
//! - **Interpreter**: pure mapping from a prediction to display data
//! - **Render**: text and JSON output for the terminal
//! - **Config**: endpoint, timeouts, and coercion policy from environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_client::config::ClientConfig;
//! use nutrition_client::errors::ClientResult;
//! use nutrition_client::form::FormController;
//! use nutrition_client::models::FormField;
//! use nutrition_client::prediction::HttpPredictionClient;
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let controller = FormController::new(HttpPredictionClient::new(&config)?, &config);
//!
//!     controller.update_field(FormField::Age, "10")?;
//!     controller.update_field(FormField::HeightCm, "140")?;
//!     controller.update_field(FormField::WeightKg, "35")?;
//!
//!     let result = controller.submit().await?;
//!     println!("BMI: {}", result.bmi);
//!     Ok(())
//! }
//! ```

/// Client configuration loaded from environment
pub mod config;

/// Defaults, environment variable names, and labels
pub mod constants;

/// Form state, coercion, and single-flight submission
pub mod form;

/// Shared HTTP client construction
pub mod http_client;

/// Prediction result to display data
pub mod interpreter;

/// Structured logging setup
pub mod logging;

/// Prediction service abstraction and HTTP implementation
pub mod prediction;

/// Terminal output for results, status, and errors
pub mod render;

pub use nutrition_core::{errors, models};

// ABOUTME: Client-wide constants and configuration defaults
// ABOUTME: Endpoint defaults, timeouts, environment variable names, and UI labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them.

/// Prediction service defaults
pub mod defaults {
    /// Base URL of the prediction service when none is configured
    pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

    /// Path of the prediction route
    pub const PREDICT_PATH: &str = "/predict";

    /// Path of the liveness route
    pub const HEALTH_PATH: &str = "/";

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;

    /// Connection establishment timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Environment variable names
pub mod env_vars {
    /// Base URL of the prediction service
    pub const API_BASE_URL: &str = "NUTRITION_API_BASE_URL";

    /// Path of the prediction route
    pub const PREDICT_PATH: &str = "NUTRITION_PREDICT_PATH";

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "NUTRITION_REQUEST_TIMEOUT_SECS";

    /// Connection establishment timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "NUTRITION_CONNECT_TIMEOUT_SECS";

    /// `true`/`1` coerces empty or invalid numeric fields to zero
    pub const LENIENT_COERCION: &str = "NUTRITION_LENIENT_COERCION";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Submit affordance and panel labels
pub mod labels {
    /// Submit label while idle
    pub const SUBMIT_IDLE: &str = "Get Nutrition Plan";

    /// Submit label while a request is in flight
    pub const SUBMIT_IN_PROGRESS: &str = "Analyzing...";

    /// Results panel heading
    pub const SUMMARY_HEADING: &str = "Health Summary";

    /// Food listing heading
    pub const PLAN_HEADING: &str = "Recommended Nutrition Plan";

    /// Shown under the plan heading when there are no meals
    pub const NO_PLAN: &str = "No nutrition plan available for this classification.";

    /// Separator between foods of one meal
    pub const FOOD_SEPARATOR: &str = ", ";
}

/// Service identity
pub mod service_names {
    /// Name used in logs and the HTTP user agent
    pub const NUTRITION_CLIENT: &str = "nutrition-client";

    /// Crate version
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

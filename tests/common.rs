// ABOUTME: Shared test utilities for nutrition client integration tests
// ABOUTME: Test logging setup, canned service payloads, and filled form fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, dead_code)]

use std::sync::Once;
use std::time::Duration;

use nutrition_client::config::ClientConfig;
use nutrition_client::form::FormInput;
use nutrition_client::models::{ActivityLevel, Gender, PredictionResult};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Form values for a 10 year old, 140 cm, 35 kg, highly active girl
pub fn filled_input() -> FormInput {
    FormInput {
        age: "10".to_owned(),
        gender: Gender::Female,
        height_cm: "140".to_owned(),
        weight_kg: "35".to_owned(),
        activity_level: ActivityLevel::High,
    }
}

/// Request body the filled form must produce
pub fn expected_request_body() -> Value {
    json!({
        "age": 10,
        "gender": "Female",
        "height_cm": 140,
        "weight_kg": 35,
        "activity_level": "High"
    })
}

/// Prediction payload for the filled form
pub fn high_prediction_body() -> Value {
    json!({
        "BMI": 17.9,
        "Calorie_Level": "High",
        "Nutrition_Recommendation": {
            "Foods": {
                "Breakfast": ["Oats with milk", "Banana"],
                "Lunch": ["Rice", "Dal", "Paneer"],
                "Dinner": ["Chicken", "Vegetables"]
            }
        }
    })
}

/// Decoded form of [`high_prediction_body`]
pub fn high_prediction() -> PredictionResult {
    serde_json::from_value(high_prediction_body()).unwrap()
}

/// Configuration pointing at a mock server
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(base_url)
        .unwrap()
        .with_request_timeout(Duration::from_secs(5))
        .unwrap()
}

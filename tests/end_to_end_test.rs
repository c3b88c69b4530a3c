// ABOUTME: End-to-end test from raw form strings to the rendered results panel
// ABOUTME: Drives the controller against a mock prediction service over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrition_client::form::{FormController, RequestLifecycleState};
use nutrition_client::interpreter::{interpret, HIGH_GUIDANCE};
use nutrition_client::models::FormField;
use nutrition_client::prediction::HttpPredictionClient;
use nutrition_client::render::{render_error, render_snapshot, render_text};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_form_to_results_panel() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(common::expected_request_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::high_prediction_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let controller = FormController::new(HttpPredictionClient::new(&config).unwrap(), &config);
    for (field, raw) in [
        (FormField::Age, "10"),
        (FormField::Gender, "Female"),
        (FormField::HeightCm, "140"),
        (FormField::WeightKg, "35"),
        (FormField::ActivityLevel, "High"),
    ] {
        controller.update_field(field, raw).unwrap();
    }
    assert_eq!(controller.submit_label(), "Get Nutrition Plan");

    let result = controller.submit().await.unwrap();
    let panel = render_text(&interpret(&result));

    assert!(panel.starts_with("Health Summary\n"));
    assert!(panel.contains("BMI: 17.9\n"));
    assert!(panel.contains("Calorie Requirement: High\n"));
    assert!(panel.contains(HIGH_GUIDANCE));
    assert!(panel.contains("Recommended Nutrition Plan\n"));
    assert!(panel.contains("Dinner: Chicken, Vegetables"));
    assert!(panel.contains("Lunch: Rice, Dal, Paneer"));

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.lifecycle, RequestLifecycleState::Idle);
    assert!(render_snapshot(&snapshot).starts_with("[ Get Nutrition Plan ]\n\nHealth Summary"));
}

#[tokio::test]
async fn test_server_failure_renders_error_without_result() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let controller = FormController::new(HttpPredictionClient::new(&config).unwrap(), &config)
        .with_input(common::filled_input());

    let err = controller.submit().await.unwrap_err();
    assert_eq!(
        render_error(&err),
        "The prediction service encountered an error (HTTP 503): warming up"
    );

    let rendered = render_snapshot(&controller.snapshot());
    assert!(rendered.contains("HTTP 503"));
    assert!(!rendered.contains("Health Summary"));
}

#[tokio::test]
async fn test_dinner_only_plan_renders_one_meal() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "BMI": 17.9,
            "Calorie_Level": "High",
            "Nutrition_Recommendation": {
                "Foods": { "Dinner": ["Chicken", "Vegetables"] }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let controller = FormController::new(HttpPredictionClient::new(&config).unwrap(), &config)
        .with_input(common::filled_input());

    let view = interpret(&controller.submit().await.unwrap());
    assert_eq!(view.meals.len(), 1);
    assert_eq!(view.meals[0].meal, "Dinner");
    assert_eq!(view.meals[0].foods, "Chicken, Vegetables");

    let rendered = render_snapshot(&controller.snapshot());
    assert!(rendered.ends_with("Recommended Nutrition Plan\nDinner: Chicken, Vegetables"));
}

// ABOUTME: Prediction response payload returned by the nutrition prediction service
// ABOUTME: Calorie classification keeps unrecognized values explicit instead of failing decode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Meal name mapped to its ordered food list, in payload order
pub type MealFoods = IndexMap<String, Vec<String>>;

/// Three-way daily energy classification produced by the prediction service
///
/// Any value outside the closed set decodes to [`CalorieLevel::Unrecognized`]
/// so that BMI and food groups can still be shown without guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalorieLevel {
    /// Limited daily energy needs
    Low,
    /// Healthy growth needs
    Medium,
    /// Higher energy needs from growth or activity
    High,
    /// A classification this client has no guidance for
    Unrecognized(String),
}

impl CalorieLevel {
    /// Wire value of this classification
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unrecognized(raw) => raw,
        }
    }
}

// Exact match on purpose: "low" or " High" are not the same classification.
impl From<String> for CalorieLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<CalorieLevel> for String {
    fn from(level: CalorieLevel) -> Self {
        match level {
            CalorieLevel::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CalorieLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule-based food plan attached to a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecommendation {
    /// Meal name to foods, order preserved from the payload
    #[serde(rename = "Foods")]
    pub foods: MealFoods,
    /// One-line daily guidance, when the service provides it
    #[serde(
        rename = "Daily_Guidance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_guidance: Option<String>,
}

/// Successful body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Body mass index as computed by the service; never recomputed locally
    #[serde(rename = "BMI")]
    pub bmi: f64,
    /// Calorie classification
    #[serde(rename = "Calorie_Level")]
    pub calorie_level: CalorieLevel,
    /// Food plan for the classification; `null` when the service has no
    /// plan for it. The key itself is required.
    #[serde(
        rename = "Nutrition_Recommendation",
        deserialize_with = "Option::deserialize"
    )]
    pub nutrition_recommendation: Option<NutritionRecommendation>,
}

/// Body of the service liveness route `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Free-form status message, e.g. "API is running"
    pub status: String,
}

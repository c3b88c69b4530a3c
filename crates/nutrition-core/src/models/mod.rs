// ABOUTME: Domain models for the nutrition prediction contract
// ABOUTME: Re-exports child attribute enums, form fields, and prediction payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Child attributes and the outbound request payload
pub mod child;

/// Form field identities
pub mod form;

/// Prediction response payload and calorie classification
pub mod prediction;

pub use child::{ActivityLevel, Gender, PredictionRequest};
pub use form::FormField;
pub use prediction::{CalorieLevel, HealthStatus, MealFoods, NutritionRecommendation, PredictionResult};

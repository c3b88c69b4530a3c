// ABOUTME: Child attribute enums and the outbound prediction request payload
// ABOUTME: Gender and activity selections are closed sets parsed from their option values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::form::FormField;
use crate::errors::FieldError;

/// Largest integer a JSON number can carry without losing precision
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Child gender as accepted by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Wire value of this option
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(FieldError::new(
                FormField::Gender,
                format!("'{s}' is not one of: Male, Female"),
            )),
        }
    }
}

/// Daily physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Low activity
    Low,
    /// Moderate activity
    #[default]
    Medium,
    /// High activity
    High,
}

impl ActivityLevel {
    /// Wire value of this option
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "moderate" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(FieldError::new(
                FormField::ActivityLevel,
                format!("'{s}' is not one of: Low, Medium, High"),
            )),
        }
    }
}

/// Outbound body of `POST /predict`
///
/// Built once per submission from validated form input and discarded when
/// the request resolves. Whole-number measurements serialize as JSON
/// integers (`140`, not `140.0`), matching what the browser client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Age in whole years
    pub age: u32,
    /// Gender selection
    pub gender: Gender,
    /// Height in centimetres
    #[serde(serialize_with = "serialize_number")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(serialize_with = "serialize_number")]
    pub weight_kg: f64,
    /// Activity selection
    pub activity_level: ActivityLevel,
}

// Values outside the safe integer range stay floats.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

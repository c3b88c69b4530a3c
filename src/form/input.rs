// ABOUTME: Raw form input and its coercion into a prediction request
// ABOUTME: Strict validation by default, with an opt-in lenient zero-coercion policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult, FieldError};
use crate::models::{ActivityLevel, FormField, Gender, PredictionRequest};

/// How free-text numeric fields become numbers at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Reject empty, non-numeric, non-finite, and non-positive values
    #[default]
    Strict,
    /// Coerce empty or unparseable values to zero and send anyway
    Lenient,
}

/// Field values as typed or selected by the user
///
/// Free-text fields hold whatever string was entered; the selections always
/// hold a member of their closed set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormInput {
    /// Age in years, as typed
    pub age: String,
    /// Gender selection
    pub gender: Gender,
    /// Height in centimetres, as typed
    pub height_cm: String,
    /// Weight in kilograms, as typed
    pub weight_kg: String,
    /// Activity selection
    pub activity_level: ActivityLevel,
}

impl FormInput {
    /// Replace one field
    ///
    /// Free-text fields accept any string. Selection fields accept only one
    /// of their option values and are left unchanged otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `FieldError` if a selection value is not a known option
    pub fn update(&mut self, field: FormField, raw: &str) -> Result<(), FieldError> {
        match field {
            FormField::Age => raw.clone_into(&mut self.age),
            FormField::HeightCm => raw.clone_into(&mut self.height_cm),
            FormField::WeightKg => raw.clone_into(&mut self.weight_kg),
            FormField::Gender => self.gender = raw.parse()?,
            FormField::ActivityLevel => self.activity_level = raw.parse()?,
        }
        Ok(())
    }

    /// Current value of a field as display text
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::HeightCm => &self.height_cm,
            FormField::WeightKg => &self.weight_kg,
            FormField::Gender => self.gender.as_str(),
            FormField::ActivityLevel => self.activity_level.as_str(),
        }
    }

    /// Free-text fields that are still empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !field.is_selection() && self.value(*field).trim().is_empty())
            .collect()
    }

    /// Coerce the held values into an outbound request
    ///
    /// # Errors
    ///
    /// Under [`CoercionPolicy::Strict`], returns `ClientError::Validation`
    /// listing every field that failed. The lenient policy never fails.
    pub fn to_request(&self, policy: CoercionPolicy) -> ClientResult<PredictionRequest> {
        match policy {
            CoercionPolicy::Strict => self.to_request_strict(),
            CoercionPolicy::Lenient => Ok(self.to_request_lenient()),
        }
    }

    fn to_request_strict(&self) -> ClientResult<PredictionRequest> {
        let age = parse_age(&self.age);
        let height_cm = parse_number(FormField::HeightCm, &self.height_cm);
        let weight_kg = parse_number(FormField::WeightKg, &self.weight_kg);

        match (age, height_cm, weight_kg) {
            (Ok(age), Ok(height_cm), Ok(weight_kg)) => Ok(PredictionRequest {
                age,
                gender: self.gender,
                height_cm,
                weight_kg,
                activity_level: self.activity_level,
            }),
            (age, height_cm, weight_kg) => {
                let errors = [age.err(), height_cm.err(), weight_kg.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ClientError::Validation(errors))
            }
        }
    }

    fn to_request_lenient(&self) -> PredictionRequest {
        let age = lenient_number(&self.age).trunc().clamp(0.0, f64::from(u32::MAX)) as u32;
        PredictionRequest {
            age,
            gender: self.gender,
            height_cm: lenient_number(&self.height_cm).max(0.0),
            weight_kg: lenient_number(&self.weight_kg).max(0.0),
            activity_level: self.activity_level,
        }
    }
}

fn parse_number(field: FormField, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::missing(field));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::new(field, format!("'{trimmed}' is not a number")))?;

    if !value.is_finite() {
        return Err(FieldError::new(field, format!("'{trimmed}' is not a finite number")));
    }
    if value <= 0.0 {
        return Err(FieldError::out_of_range(
            field,
            format!("{} must be greater than zero", field.label()),
        ));
    }
    Ok(value)
}

fn parse_age(raw: &str) -> Result<u32, FieldError> {
    let value = parse_number(FormField::Age, raw)?;
    if value.fract() != 0.0 {
        return Err(FieldError::new(
            FormField::Age,
            "Age (years) must be a whole number",
        ));
    }
    if value > f64::from(u32::MAX) {
        return Err(FieldError::out_of_range(FormField::Age, "Age (years) is too large"));
    }
    Ok(value as u32)
}

// Empty, unparseable, and non-finite input all become zero.
fn lenient_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

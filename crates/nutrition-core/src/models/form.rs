// ABOUTME: Identities of the five form fields collected before a prediction
// ABOUTME: Wire names match the request payload keys; labels are shown in prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single input field of the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Age in years (free text)
    Age,
    /// Gender (selection)
    Gender,
    /// Height in centimetres (free text)
    HeightCm,
    /// Weight in kilograms (free text)
    WeightKg,
    /// Activity level (selection)
    ActivityLevel,
}

impl FormField {
    /// Every field, in form order
    pub const ALL: [Self; 5] = [
        Self::Age,
        Self::Gender,
        Self::HeightCm,
        Self::WeightKg,
        Self::ActivityLevel,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::ActivityLevel => "activity_level",
        }
    }

    /// Placeholder / prompt text for the field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age (years)",
            Self::Gender => "Gender",
            Self::HeightCm => "Height (cm)",
            Self::WeightKg => "Weight (kg)",
            Self::ActivityLevel => "Activity level",
        }
    }

    /// Whether the field is a closed selection rather than free text
    #[must_use]
    pub const fn is_selection(self) -> bool {
        matches!(self, Self::Gender | Self::ActivityLevel)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_fields() {
        let selections: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| f.is_selection())
            .collect();
        assert_eq!(selections, vec![FormField::Gender, FormField::ActivityLevel]);
    }
}

// ABOUTME: Maps a prediction result to display data for the results panel
// ABOUTME: Calorie level explanations and meal groups with foods joined in payload order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::constants::labels::FOOD_SEPARATOR;
use crate::models::{CalorieLevel, PredictionResult};

/// Explanation for the `Low` classification
pub const LOW_GUIDANCE: &str = "Low calorie requirement indicates limited daily energy needs. The focus is on balanced nutrition without excess calories.";

/// Explanation for the `Medium` classification
pub const MEDIUM_GUIDANCE: &str = "Medium calorie requirement indicates healthy growth needs with a balanced intake of carbohydrates, proteins, and fats.";

/// Explanation for the `High` classification
pub const HIGH_GUIDANCE: &str = "High calorie requirement indicates higher energy needs due to growth or activity. A nutrient-dense diet is recommended.";

/// Explanatory text attached to a calorie classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    /// Fixed guidance for a recognized classification
    Guidance {
        /// Guidance text
        text: &'static str,
    },
    /// No guidance exists for this classification
    Unavailable {
        /// Classification as returned by the service
        calorie_level: String,
    },
}

impl Explanation {
    /// Text shown beneath the classification
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Guidance { text } => (*text).to_owned(),
            Self::Unavailable { calorie_level } => {
                format!("No guidance available for calorie level \"{calorie_level}\".")
            }
        }
    }
}

/// Explanation for a calorie classification
#[must_use]
pub fn explanation(level: &CalorieLevel) -> Explanation {
    match level {
        CalorieLevel::Low => Explanation::Guidance { text: LOW_GUIDANCE },
        CalorieLevel::Medium => Explanation::Guidance {
            text: MEDIUM_GUIDANCE,
        },
        CalorieLevel::High => Explanation::Guidance {
            text: HIGH_GUIDANCE,
        },
        CalorieLevel::Unrecognized(raw) => Explanation::Unavailable {
            calorie_level: raw.clone(),
        },
    }
}

/// One meal and its foods as a single display line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealGroup {
    /// Meal name, e.g. "Breakfast"
    pub meal: String,
    /// Food names joined with `", "`
    pub foods: String,
}

/// Everything the results panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    /// BMI exactly as returned
    pub bmi: f64,
    /// Classification as returned
    pub calorie_level: String,
    /// Explanation for the classification
    pub explanation: Explanation,
    /// Daily guidance line from the service, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_guidance: Option<String>,
    /// Meals in payload order; empty when the service sent no plan
    pub meals: Vec<MealGroup>,
}

/// Derive the display data for a prediction result
#[must_use]
pub fn interpret(result: &PredictionResult) -> ResultView {
    let plan = result.nutrition_recommendation.as_ref();
    let meals = plan.map_or_else(Vec::new, |plan| {
        plan.foods
            .iter()
            .map(|(meal, foods)| MealGroup {
                meal: meal.clone(),
                foods: foods.join(FOOD_SEPARATOR),
            })
            .collect()
    });

    ResultView {
        bmi: result.bmi,
        calorie_level: result.calorie_level.to_string(),
        explanation: explanation(&result.calorie_level),
        daily_guidance: plan.and_then(|plan| plan.daily_guidance.clone()),
        meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_recognized_level_has_guidance() {
        assert_eq!(explanation(&CalorieLevel::Low).text(), LOW_GUIDANCE);
        assert_eq!(explanation(&CalorieLevel::Medium).text(), MEDIUM_GUIDANCE);
        assert_eq!(explanation(&CalorieLevel::High).text(), HIGH_GUIDANCE);
    }

    #[test]
    fn test_unrecognized_level_names_the_raw_value() {
        let level = CalorieLevel::from("Extreme".to_owned());
        let explained = explanation(&level);

        assert_eq!(
            explained,
            Explanation::Unavailable {
                calorie_level: "Extreme".to_owned()
            }
        );
        assert_eq!(
            explained.text(),
            "No guidance available for calorie level \"Extreme\"."
        );
    }
}

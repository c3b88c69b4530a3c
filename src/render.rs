// ABOUTME: Terminal rendering of the results panel, submit status, and submission errors
// ABOUTME: Text panel for people, JSON for scripts; never shows a result beside an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::labels;
use crate::errors::ClientError;
use crate::form::{FormSnapshot, RequestLifecycleState};
use crate::interpreter::{interpret, ResultView};

/// Results panel as plain text
#[must_use]
pub fn render_text(view: &ResultView) -> String {
    let mut lines = vec![
        labels::SUMMARY_HEADING.to_owned(),
        format!("BMI: {}", view.bmi),
        format!("Calorie Requirement: {}", view.calorie_level),
        String::new(),
        view.explanation.text(),
    ];

    if let Some(guidance) = &view.daily_guidance {
        lines.push(format!("Daily guidance: {guidance}"));
    }

    lines.push(String::new());
    lines.push(labels::PLAN_HEADING.to_owned());
    if view.meals.is_empty() {
        lines.push(labels::NO_PLAN.to_owned());
    }
    lines.extend(
        view.meals
            .iter()
            .map(|group| format!("{}: {}", group.meal, group.foods)),
    );

    lines.join("\n")
}

/// Results panel as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the view cannot be serialized
pub fn render_json(view: &ResultView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

/// Submit affordance for a lifecycle state
#[must_use]
pub fn render_status(lifecycle: RequestLifecycleState) -> String {
    format!("[ {} ]", lifecycle.submit_label())
}

/// User-facing message for a failed or blocked submission
///
/// Leads with the error code's description, followed by the detail
/// carried by the error.
#[must_use]
pub fn render_error(error: &ClientError) -> String {
    let summary = error.code().description();
    match error {
        ClientError::Validation(errors) => {
            let mut lines = vec![format!("{summary}. Please correct the following fields:")];
            lines.extend(
                errors
                    .iter()
                    .map(|e| format!("  - {}: {}", e.field.label(), e.message)),
            );
            lines.join("\n")
        }
        ClientError::Network(message) => {
            format!("{summary} ({message}). Check that it is running and try again.")
        }
        ClientError::Timeout { timeout_ms } => {
            format!("{summary} (waited {timeout_ms}ms). Please try again.")
        }
        ClientError::Server { status, message } => {
            format!("{summary} (HTTP {status}): {message}")
        }
        ClientError::Decode(message) | ClientError::Config(message) => {
            format!("{summary}: {message}")
        }
        ClientError::SubmissionInFlight => format!("{summary}."),
    }
}

/// Whole form view: status line followed by the error or the results panel
#[must_use]
pub fn render_snapshot(snapshot: &FormSnapshot) -> String {
    let mut out = render_status(snapshot.lifecycle);
    let body = match (&snapshot.error, &snapshot.result) {
        (Some(error), _) => Some(render_error(error)),
        (None, Some(result)) => Some(render_text(&interpret(result))),
        (None, None) => None,
    };

    if let Some(body) = body {
        out.push_str("\n\n");
        out.push_str(&body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;
    use crate::models::FormField;

    #[test]
    fn test_validation_error_lists_each_field() {
        let error = ClientError::Validation(vec![
            FieldError::missing(FormField::Age),
            FieldError::new(FormField::WeightKg, "'abc' is not a number"),
        ]);

        let text = render_error(&error);
        assert!(text.contains("  - Age (years): Age (years) is required"));
        assert!(text.contains("  - Weight (kg): 'abc' is not a number"));
    }

    #[test]
    fn test_error_messages_lead_with_code_description() {
        assert_eq!(
            render_error(&ClientError::SubmissionInFlight),
            "A nutrition plan request is already in progress."
        );
        assert_eq!(
            render_error(&ClientError::Timeout { timeout_ms: 15000 }),
            "The prediction service did not respond in time (waited 15000ms). Please try again."
        );
        assert_eq!(
            render_error(&ClientError::Config("bad URL".to_owned())),
            "Configuration is invalid: bad URL"
        );
        assert!(render_error(&ClientError::Validation(vec![FieldError::missing(FormField::Age)]))
            .starts_with("A required field is missing. Please correct the following fields:"));
    }

    #[test]
    fn test_status_follows_lifecycle() {
        assert_eq!(
            render_status(RequestLifecycleState::Idle),
            "[ Get Nutrition Plan ]"
        );
        assert_eq!(
            render_status(RequestLifecycleState::Submitting),
            "[ Analyzing... ]"
        );
    }

    #[test]
    fn test_empty_snapshot_renders_status_only() {
        assert_eq!(
            render_snapshot(&FormSnapshot::default()),
            "[ Get Nutrition Plan ]"
        );
    }
}

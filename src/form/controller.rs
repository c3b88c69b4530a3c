// ABOUTME: Form state manager owning input, lifecycle, result, and error as one unit
// ABOUTME: Enforces single-flight submission and resets to idle on every exit path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::warn;
use uuid::Uuid;

use super::input::{CoercionPolicy, FormInput};
use super::lifecycle::RequestLifecycleState;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::logging::ClientLogger;
use crate::models::{FormField, PredictionRequest, PredictionResult};
use crate::prediction::PredictionService;

/// Consistent copy of the whole form state
///
/// Observers only ever see one of these, so a `Submitting` lifecycle never
/// appears next to a stale result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    /// Field values
    pub input: FormInput,
    /// Lifecycle flag
    pub lifecycle: RequestLifecycleState,
    /// Result of the last successful submission, cleared when a new one starts
    pub result: Option<PredictionResult>,
    /// Error of the last failed or blocked submission
    pub error: Option<ClientError>,
}

/// Owns the form state and drives submissions to a prediction service
///
/// All mutation goes through [`FormController::update_field`] and
/// [`FormController::submit`]; the state is never handed out by reference.
pub struct FormController<S> {
    state: Mutex<FormSnapshot>,
    service: S,
    coercion: CoercionPolicy,
    timeout: Duration,
}

impl<S: PredictionService> FormController<S> {
    /// Create a controller with empty input and default selections
    #[must_use]
    pub fn new(service: S, config: &ClientConfig) -> Self {
        Self {
            state: Mutex::new(FormSnapshot::default()),
            service,
            coercion: config.coercion,
            timeout: config.request_timeout,
        }
    }

    /// Replace the whole input, e.g. when pre-filled from command-line flags
    #[must_use]
    pub fn with_input(self, input: FormInput) -> Self {
        lock_state(&self.state).input = input;
        self
    }

    /// Replace one field
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if a selection value is not one of
    /// its options; the held value is left unchanged
    pub fn update_field(&self, field: FormField, raw: &str) -> ClientResult<()> {
        lock_state(&self.state)
            .input
            .update(field, raw)
            .map_err(|e| ClientError::Validation(vec![e]))
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        lock_state(&self.state).clone()
    }

    /// Current lifecycle state
    #[must_use]
    pub fn lifecycle(&self) -> RequestLifecycleState {
        lock_state(&self.state).lifecycle
    }

    /// Label of the submit affordance for the current state
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        self.lifecycle().submit_label()
    }

    /// Validate the input and submit it to the prediction service
    ///
    /// At most one submission is in flight at a time. On completion the
    /// lifecycle is back to `Idle` with either the result or the error
    /// stored, never both.
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` if called while `Submitting`; state untouched
    /// - `Validation` if the input cannot be coerced; nothing is sent
    /// - `Network`, `Timeout`, `Server`, or `Decode` from the service call
    pub async fn submit(&self) -> ClientResult<PredictionResult> {
        let request = self.begin_submission()?;
        let guard = SubmissionGuard::new(&self.state);

        let submission_id = Uuid::new_v4().to_string();
        ClientLogger::log_submission_started(&submission_id, &self.service.endpoint());
        let started = Instant::now();

        let outcome = match timeout(self.timeout, self.service.predict(&request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        };

        match &outcome {
            Ok(result) => ClientLogger::log_prediction_received(
                &submission_id,
                result.calorie_level.as_str(),
                started.elapsed(),
            ),
            Err(error) => ClientLogger::log_submission_failed(
                &submission_id,
                &format!("{:?}", error.code()),
                error.is_retryable(),
                &error.to_string(),
            ),
        }

        guard.complete(&outcome);
        outcome
    }

    // Guard check, validation, and the Idle -> Submitting transition happen
    // under one lock acquisition.
    fn begin_submission(&self) -> ClientResult<PredictionRequest> {
        let mut state = lock_state(&self.state);
        if !state.lifecycle.can_submit() {
            return Err(ClientError::SubmissionInFlight);
        }

        match state.input.to_request(self.coercion) {
            Ok(request) => {
                state.lifecycle = RequestLifecycleState::Submitting;
                state.result = None;
                state.error = None;
                Ok(request)
            }
            Err(error) => {
                let fields: Vec<&str> = error
                    .field_errors()
                    .iter()
                    .map(|e| e.field.as_str())
                    .collect();
                ClientLogger::log_validation_rejected(&fields);
                state.error = Some(error.clone());
                Err(error)
            }
        }
    }
}

/// Returns the lifecycle to `Idle` when a submission ends, however it ends
struct SubmissionGuard<'a> {
    state: &'a Mutex<FormSnapshot>,
    completed: bool,
}

impl<'a> SubmissionGuard<'a> {
    const fn new(state: &'a Mutex<FormSnapshot>) -> Self {
        Self {
            state,
            completed: false,
        }
    }

    fn complete(mut self, outcome: &ClientResult<PredictionResult>) {
        let mut state = lock_state(self.state);
        match outcome {
            Ok(result) => {
                state.result = Some(result.clone());
                state.error = None;
            }
            Err(error) => {
                state.result = None;
                state.error = Some(error.clone());
            }
        }
        state.lifecycle = RequestLifecycleState::Idle;
        self.completed = true;
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            warn!("Submission dropped before completion, resetting lifecycle");
            let mut state = lock_state(self.state);
            state.lifecycle = RequestLifecycleState::Idle;
            state.result = None;
        }
    }
}

fn lock_state(state: &Mutex<FormSnapshot>) -> MutexGuard<'_, FormSnapshot> {
    state.lock().unwrap_or_else(|poisoned| {
        warn!("Form state lock poisoned, recovering");
        poisoned.into_inner()
    })
}

// ABOUTME: Error taxonomy for a single prediction submission attempt
// ABOUTME: Validation, transport, timeout, server, decode, and single-flight rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ErrorCode;
use crate::models::FormField;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field the message belongs to
    pub field: FormField,
    /// Why the value was rejected
    pub code: ErrorCode,
    /// Message shown next to the field
    pub message: String,
}

impl FieldError {
    /// Invalid value for a field
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            code: ErrorCode::InvalidInput,
            message: message.into(),
        }
    }

    /// Required field left empty
    #[must_use]
    pub fn missing(field: FormField) -> Self {
        Self {
            field,
            code: ErrorCode::MissingRequiredField,
            message: format!("{} is required", field.label()),
        }
    }

    /// Numeric value outside the accepted range
    pub fn out_of_range(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            code: ErrorCode::ValueOutOfRange,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ways a submission attempt can end other than with a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// One or more fields failed validation; nothing was sent
    #[error("invalid input: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The prediction endpoint could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The prediction endpoint did not answer within the configured timeout
    #[error("prediction request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds
        timeout_ms: u64,
    },

    /// The prediction endpoint answered with a non-2xx status
    #[error("prediction service returned HTTP {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or status reason
        message: String,
    },

    /// The response body was not valid JSON or was missing fields
    #[error("failed to decode prediction response: {0}")]
    Decode(String),

    /// A submission is already awaiting its response
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Client configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Stable error code for this error
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(errors) => errors
                .first()
                .map_or(ErrorCode::InvalidInput, |error| error.code),
            Self::Network(_) => ErrorCode::ExternalServiceUnavailable,
            Self::Timeout { .. } => ErrorCode::ExternalServiceTimeout,
            Self::Server { .. } => ErrorCode::ExternalServiceError,
            Self::Decode(_) => ErrorCode::SerializationError,
            Self::SubmissionInFlight => ErrorCode::ResourceLocked,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Whether the user may reasonably try the same submission again
    ///
    /// Client-side 4xx rejections are not retryable; 5xx are.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Server { status, .. } => *status >= 500,
            other => other.code().is_retryable(),
        }
    }

    /// Field-level messages, empty unless this is a validation error
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ABOUTME: Unified error codes for the nutrition client
// ABOUTME: Stable serialized codes with user-facing descriptions and retry hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! `ErrorCode` gives every failure a stable, serializable identity.
//! `ClientError` is the taxonomy a single submission attempt can end in;
//! none of its variants are fatal to the process.

/// Submission error taxonomy
pub mod client;

pub use client::{ClientError, ClientResult, FieldError};

use serde::{Deserialize, Serialize};

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A field value could not be coerced to its semantic type
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was left empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric field is zero, negative, or not finite
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A submission is already in flight
    #[serde(rename = "RESOURCE_LOCKED")]
    ResourceLocked = 4002,

    // External Services (5000-5999)
    /// The prediction service answered with a non-success status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The prediction service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The prediction service did not answer in time
    #[serde(rename = "EXTERNAL_SERVICE_TIMEOUT")]
    ExternalServiceTimeout = 5004,

    // Configuration (6000-6999)
    /// Client configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// The response body could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceLocked => "A nutrition plan request is already in progress",
            Self::ExternalServiceError => "The prediction service encountered an error",
            Self::ExternalServiceUnavailable => "The prediction service is currently unavailable",
            Self::ExternalServiceTimeout => "The prediction service did not respond in time",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "The prediction service returned an unreadable response",
        }
    }

    /// Whether trying the same submission again may succeed
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalServiceTimeout
                | Self::ResourceLocked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ExternalServiceTimeout).unwrap();
        assert_eq!(json, "\"EXTERNAL_SERVICE_TIMEOUT\"");
    }

    #[test]
    fn test_retryable_codes() {
        assert!(ErrorCode::ExternalServiceUnavailable.is_retryable());
        assert!(ErrorCode::ExternalServiceTimeout.is_retryable());
        assert!(!ErrorCode::InvalidInput.is_retryable());
        assert!(!ErrorCode::SerializationError.is_retryable());
    }
}

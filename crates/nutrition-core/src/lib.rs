// ABOUTME: Core models and error types for the child nutrition recommendation client
// ABOUTME: Foundation crate with wire payloads, form field identities, and the error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate shared by the nutrition client. It changes infrequently
//! and carries no I/O.
//!
//! ## Modules
//!
//! - **models**: prediction request/response payloads and the closed enums they use
//! - **errors**: `ErrorCode` and the `ClientError` submission taxonomy

/// Prediction payloads, form field identities, and selection enums
pub mod models;

/// Error codes and the client error taxonomy
pub mod errors;

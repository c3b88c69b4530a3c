// ABOUTME: Configuration module for the prediction service client
// ABOUTME: Re-exports environment-driven client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment};

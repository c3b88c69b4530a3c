// ABOUTME: Form state manager for the nutrition prediction form
// ABOUTME: Raw input, coercion policy, lifecycle flag, and the submitting controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Single-flight controller over the form state
pub mod controller;

/// Raw field values and their coercion into a request
pub mod input;

/// Idle / Submitting lifecycle
pub mod lifecycle;

pub use controller::{FormController, FormSnapshot};
pub use input::{CoercionPolicy, FormInput};
pub use lifecycle::RequestLifecycleState;

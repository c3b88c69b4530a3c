// ABOUTME: Re-exports helper modules for nutrition-cli
// ABOUTME: Provides interactive prompting for missing form fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod prompt;

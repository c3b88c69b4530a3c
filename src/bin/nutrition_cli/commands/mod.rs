// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: Provides the predict and health subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod health;
pub mod predict;

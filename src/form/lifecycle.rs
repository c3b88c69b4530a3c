// ABOUTME: Request lifecycle flag distinguishing ready-to-submit from awaiting-response
// ABOUTME: Drives whether a submit may start and what the submit affordance shows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::labels;

/// Request lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestLifecycleState {
    /// Ready to submit
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
}

impl RequestLifecycleState {
    /// Whether a new submission may start
    #[must_use]
    pub const fn can_submit(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Label of the submit affordance in this state
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Idle => labels::SUBMIT_IDLE,
            Self::Submitting => labels::SUBMIT_IN_PROGRESS,
        }
    }
}

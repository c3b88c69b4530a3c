// ABOUTME: Health command for nutrition-cli
// ABOUTME: Calls the prediction service liveness route and prints its status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use nutrition_client::config::ClientConfig;
use nutrition_client::prediction::{HttpPredictionClient, PredictionService};
use nutrition_client::render::render_error;

/// Check that the prediction service is reachable
pub async fn run(config: &ClientConfig) -> Result<()> {
    let url = config.health_url()?;
    let status = HttpPredictionClient::new(config)?
        .health()
        .await
        .map_err(|e| anyhow!(render_error(&e)))?;

    println!("{url}: {}", status.status);
    Ok(())
}

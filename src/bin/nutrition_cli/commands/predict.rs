// ABOUTME: Predict command for nutrition-cli
// ABOUTME: Fills the form from flags and prompts, submits once, and prints the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, IsTerminal};

use anyhow::{anyhow, Result};
use nutrition_client::config::ClientConfig;
use nutrition_client::form::FormController;
use nutrition_client::interpreter::interpret;
use nutrition_client::models::FormField;
use nutrition_client::prediction::HttpPredictionClient;
use nutrition_client::render::{render_error, render_json, render_snapshot, render_status};
use tracing::debug;

use crate::helpers::prompt::prompt_missing_fields;
use crate::{OutputFormat, PredictArgs};

/// Submit the child attributes and print the result
pub async fn run(config: &ClientConfig, args: PredictArgs) -> Result<()> {
    let service = HttpPredictionClient::new(config)?;
    debug!(http.url = %service.predict_url(), "Prediction client ready");
    let controller = FormController::new(service, config);

    let provided = [
        (FormField::Age, args.age),
        (FormField::Gender, args.gender),
        (FormField::HeightCm, args.height_cm),
        (FormField::WeightKg, args.weight_kg),
        (FormField::ActivityLevel, args.activity_level),
    ];
    for (field, value) in provided {
        if let Some(value) = value {
            controller
                .update_field(field, &value)
                .map_err(|e| anyhow!(render_error(&e)))?;
        }
    }

    prompt_missing_fields(&controller).await?;

    // The status line is read from the controller after submit has run up
    // to its first await, so it reflects the in-flight lifecycle.
    let show_status = args.format == OutputFormat::Text && io::stderr().is_terminal();
    let status = async {
        tokio::task::yield_now().await;
        let lifecycle = controller.lifecycle();
        if show_status && !lifecycle.can_submit() {
            eprintln!("{}", render_status(lifecycle));
        }
    };
    let (outcome, ()) = tokio::join!(controller.submit(), status);
    let result = outcome.map_err(|e| anyhow!(render_error(&e)))?;

    match args.format {
        OutputFormat::Text => println!("{}", render_snapshot(&controller.snapshot())),
        OutputFormat::Json => println!("{}", render_json(&interpret(&result))?),
    }

    Ok(())
}

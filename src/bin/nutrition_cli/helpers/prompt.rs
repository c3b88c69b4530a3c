// ABOUTME: Interactive prompting for form fields not given on the command line
// ABOUTME: Only prompts when stdin is a terminal so scripted runs fail validation instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, IsTerminal};

use anyhow::Result;
use nutrition_client::form::FormController;
use nutrition_client::prediction::PredictionService;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Ask for each still-empty free-text field, one line per field
pub async fn prompt_missing_fields<S: PredictionService>(controller: &FormController<S>) -> Result<()> {
    let missing = controller.snapshot().input.missing_fields();
    if missing.is_empty() || !io::stdin().is_terminal() {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    for field in missing {
        stdout
            .write_all(format!("{}: ", field.label()).as_bytes())
            .await?;
        stdout.flush().await?;

        // EOF leaves the rest empty for validation to report
        let Some(line) = lines.next_line().await? else {
            break;
        };
        controller.update_field(field, line.trim())?;
    }

    Ok(())
}

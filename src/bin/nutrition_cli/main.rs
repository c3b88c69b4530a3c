// ABOUTME: Nutrition CLI - command-line front end for the child nutrition prediction service
// ABOUTME: Collects child attributes, submits them, and prints the nutrition plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Get a nutrition plan
//! nutrition-cli predict --age 10 --gender Female --height-cm 140 --weight-kg 35 --activity-level High
//!
//! # Prompt for any missing measurement, print JSON
//! nutrition-cli predict --gender Male --format json
//!
//! # Use a different service and a shorter timeout
//! nutrition-cli --endpoint http://localhost:9000 --timeout-secs 5 predict --age 8 --height-cm 125 --weight-kg 26
//!
//! # Check that the service is up
//! nutrition-cli health
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nutrition_client::config::ClientConfig;
use nutrition_client::form::CoercionPolicy;
use nutrition_client::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Child nutrition plan client",
    long_about = "Submits a child's age, gender, height, weight, and activity level to the nutrition prediction service and prints the resulting plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Prediction service base URL override
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Submit child attributes and print the nutrition plan
    Predict(PredictArgs),

    /// Check that the prediction service is running
    Health,
}

/// Child attributes; free-text values are validated at submit time
#[derive(Args)]
struct PredictArgs {
    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Male or Female (default: Male)
    #[arg(long)]
    gender: Option<String>,

    /// Height in centimetres
    #[arg(long)]
    height_cm: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: Option<String>,

    /// Low, Medium, or High (default: Medium)
    #[arg(long)]
    activity_level: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Send empty or invalid measurements as zero instead of rejecting them
    #[arg(long)]
    lenient: bool,
}

/// How the result is printed
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Results panel
    Text,
    /// Interpreted result as JSON
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(endpoint) = cli.endpoint.as_deref() {
        config = config.with_base_url(endpoint)?;
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs))?;
    }
    debug!(base_url = %config.base_url, "Using prediction service");

    match cli.command {
        Command::Predict(args) => {
            if args.lenient {
                config = config.with_coercion(CoercionPolicy::Lenient);
            }
            commands::predict::run(&config, args).await?;
        }
        Command::Health => {
            commands::health::run(&config).await?;
        }
    }

    Ok(())
}

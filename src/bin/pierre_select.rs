// ABOUTME: Command-line exercise selection for a single workout request
// ABOUTME: Reads a SelectionRequest JSON file and prints the selected workout as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Select with the configured LLM provider
//! OPENAI_API_KEY=... cargo run --bin pierre-select -- request.json
//!
//! # Deterministic selection without any model call
//! cargo run --bin pierre-select -- request.json --fallback-only
//!
//! # Local OpenAI-compatible server
//! PIERRE_LLM_PROVIDER=ollama PIERRE_LLM_MODEL=qwen2.5:14b cargo run --bin pierre-select -- request.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pierre_program_api::logging::LoggingConfig;
use pierre_program_api::models::SelectionRequest;
use pierre_program_api::selection::{fallback_selection, ExerciseSelector};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-select",
    about = "Pierre exercise selection",
    long_about = "Select the exercises of one workout from a JSON selection request, using an LLM with a deterministic fallback."
)]
struct SelectArgs {
    /// Path to a `SelectionRequest` JSON file
    request: PathBuf,

    /// Skip the LLM and use the deterministic fallback
    #[arg(long)]
    fallback_only: bool,

    /// Do not read or populate the selection cache
    #[arg(long)]
    no_cache: bool,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SelectArgs::parse();
    LoggingConfig::from_env().init()?;

    let raw = tokio::fs::read_to_string(&args.request)
        .await
        .with_context(|| format!("Failed to read {}", args.request.display()))?;
    let request: SelectionRequest =
        serde_json::from_str(&raw).context("Invalid selection request JSON")?;

    info!(
        workout_type = %request.workout_type,
        candidates = request.available_exercises.len(),
        "Selecting {} exercises",
        request.exercise_count
    );

    let response = if args.fallback_only {
        fallback_selection(&request)
    } else {
        let selector = ExerciseSelector::from_env().context("Failed to initialize LLM provider")?;
        selector.select(&request, !args.no_cache).await
    };

    let output = if args.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{output}");
    Ok(())
}

// ABOUTME: Main library entry point for Pierre program generation API
// ABOUTME: Provides LLM-backed exercise selection with deterministic fallback and template access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Program API
//!
//! Selects the exercises of a single workout with a large language model,
//! validating every answer against the candidate list and degrading to a
//! deterministic compound-first selection whenever the model cannot be used.
//!
//! ## Architecture
//!
//! - **Selection**: prompt building, response validation, retries, caching and fallback
//! - **LLM**: provider abstraction and an OpenAI-compatible provider
//! - **Templates**: program template repository used by program-level orchestration
//! - **Config**: environment-driven selector and provider configuration
//! - **Logging**: `tracing` subscriber setup
//!
//! Shared errors, constants and models live in `pierre-program-core` and are
//! re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_program_api::models::{CandidateExercise, SelectionRequest, TrainingGoal};
//! use pierre_program_api::selection::ExerciseSelector;
//!
//! #[tokio::main]
//! async fn main() -> pierre_program_api::errors::AppResult<()> {
//!     let selector = ExerciseSelector::from_env()?;
//!     let request = SelectionRequest::new("push", TrainingGoal::Hypertrophy, "beginner", 1)
//!         .with_exercises(vec![CandidateExercise::new("bench", "Bench Press", "compound")]);
//!
//!     let workout = selector.select(&request, true).await;
//!     println!("{} minutes", workout.estimated_duration_minutes);
//!     Ok(())
//! }
//! ```

/// Selector and LLM provider configuration
pub mod config;

/// LLM provider abstraction and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Exercise selection pipeline
pub mod selection;

/// Program template repository
pub mod templates;

pub use pierre_program_core::{constants, errors, models};

// ABOUTME: Exercise selection pipeline with LLM-backed choice and deterministic fallback
// ABOUTME: Wires prompt building, response validation, caching, retries, and fallback together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Selection
//!
//! Picks the exercises of a single workout. The model path builds a prompt,
//! asks a [`SelectionModel`] for a JSON answer and validates it against the
//! candidate list. When every attempt fails the deterministic
//! [`fallback_selection`] answers instead, so selection never fails.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_program_api::models::{CandidateExercise, SelectionRequest, TrainingGoal};
//! use pierre_program_api::selection::ExerciseSelector;
//!
//! # async fn example() -> Result<(), pierre_program_api::errors::AppError> {
//! let selector = ExerciseSelector::from_env()?;
//! let request = SelectionRequest::new("legs", TrainingGoal::Strength, "intermediate", 2)
//!     .with_muscle_groups(["quadriceps", "glutes"])
//!     .with_exercises(vec![
//!         CandidateExercise::new("squat", "Back Squat", "compound"),
//!         CandidateExercise::new("lunge", "Walking Lunge", "compound"),
//!     ]);
//!
//! let workout = selector.select(&request, true).await;
//! println!("{} exercises", workout.exercises.len());
//! # Ok(())
//! # }
//! ```

mod cache;
mod fallback;
mod model;
mod observer;
mod parser;
mod selector;

pub use cache::{fingerprint, FlightOutcome, SelectionCache};
pub use fallback::{fallback_selection, rep_scheme, RepScheme};
pub use model::{LlmSelectionModel, SelectionModel};
pub use observer::{NoopObserver, SelectionObserver, TracingObserver};
pub use parser::parse_selection_response;
pub use selector::ExerciseSelector;

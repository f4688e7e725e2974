// ABOUTME: Core data models for exercise selection and program templates
// ABOUTME: Candidate exercises, training goals, selection request/response, and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data types shared by the selection pipeline and the template
//! repository. All models serialize with `serde` so they can travel over
//! JSON boundaries unchanged.

/// Candidate exercises and training goals
pub mod exercise;
/// Selection request and response types
pub mod selection;
/// Reusable program templates
pub mod template;

pub use exercise::{CandidateExercise, TrainingGoal};
pub use selection::{ExerciseSelection, SelectionRequest, SelectionResponse};
pub use template::{NewProgramTemplate, ProgramTemplate};

// ABOUTME: Shared test utilities for exercise selection integration tests
// ABOUTME: Provides scripted selection models, recording observers, and request builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_program_api`

use async_trait::async_trait;
use pierre_program_api::errors::{AppError, ErrorCode, SelectionError};
use pierre_program_api::models::{CandidateExercise, SelectionRequest, TrainingGoal};
use pierre_program_api::selection::{SelectionModel, SelectionObserver};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted model behavior
#[derive(Debug, Clone)]
pub enum Step {
    /// Return this raw text
    Reply(String),
    /// Fail with a transport error
    Fail,
    /// Return this raw text after sleeping
    Slow(Duration, String),
}

/// Deterministic [`SelectionModel`] that plays back a script.
///
/// When the script runs out the last step repeats.
pub struct ScriptedModel {
    steps: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    calls: AtomicU32,
}

impl ScriptedModel {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            last: Mutex::new(None),
            calls: AtomicU32::new(0),
        }
    }

    /// Always answer with `raw`
    pub fn replying(raw: impl Into<String>) -> Self {
        Self::new([Step::Reply(raw.into())])
    }

    /// Always fail
    pub fn failing() -> Self {
        Self::new([Step::Fail])
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> Step {
        let mut steps = self.steps.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(step) = steps.pop_front() {
            *last = Some(step.clone());
            step
        } else {
            last.clone().unwrap_or(Step::Fail)
        }
    }
}

#[async_trait]
impl SelectionModel for ScriptedModel {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, SelectionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Step::Reply(raw) => Ok(raw),
            Step::Fail => Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "scripted transport failure",
            )
            .into()),
            Step::Slow(delay, raw) => {
                tokio::time::sleep(delay).await;
                Ok(raw)
            }
        }
    }
}

/// Observer that counts each kind of event
#[derive(Default)]
pub struct RecordingObserver {
    pub cache_hits: AtomicU32,
    pub invalid_exercises: Mutex<Vec<String>>,
    pub failed_attempts: AtomicU32,
    pub fallbacks: Mutex<Vec<u32>>,
}

impl SelectionObserver for RecordingObserver {
    fn on_cache_hit(&self, _fingerprint: &str) {
        self.cache_hits.fetch_add(1, Ordering::SeqCst);
    }

    fn on_invalid_exercise(&self, error: &SelectionError) {
        if let SelectionError::InvalidReference { exercise_id } = error {
            self.invalid_exercises
                .lock()
                .unwrap()
                .push(exercise_id.clone());
        }
    }

    fn on_attempt_failed(&self, _attempt: u32, _max_attempts: u32, _error: &SelectionError) {
        self.failed_attempts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_fallback(&self, _request: &SelectionRequest, attempts: u32) {
        self.fallbacks.lock().unwrap().push(attempts);
    }
}

/// Push-day candidates: two compound lifts and two isolation moves
pub fn push_candidates() -> Vec<CandidateExercise> {
    vec![
        CandidateExercise::new("tricep_pushdown", "Tricep Pushdown", "isolation"),
        CandidateExercise::new("bench", "Bench Press", "compound"),
        CandidateExercise::new("lateral_raise", "Lateral Raise", "isolation"),
        CandidateExercise::new("ohp", "Overhead Press", "compound"),
    ]
}

/// Push-day request selecting `count` exercises
pub fn push_request(count: u32) -> SelectionRequest {
    SelectionRequest::new("push", TrainingGoal::Hypertrophy, "intermediate", count)
        .with_muscle_groups(["chest", "shoulders", "triceps"])
        .with_equipment(["barbell", "cable"])
        .with_exercises(push_candidates())
}

/// Valid model answer picking the given ids
pub fn model_answer(ids: &[&str]) -> String {
    let exercises: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "exercise_id": id,
                "exercise_name": id,
                "sets": 4,
                "reps": "6-8",
                "rest_seconds": 120,
                "notes": "Control the eccentric"
            })
        })
        .collect();
    json!({
        "exercises": exercises,
        "workout_notes": "Heavy push day",
        "estimated_duration_minutes": 50
    })
    .to_string()
}

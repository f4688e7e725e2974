// ABOUTME: Exercise selection request and response models
// ABOUTME: Structured parameters for a single workout and the exercises chosen for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{CandidateExercise, TrainingGoal};
use crate::constants::selection::FALLBACK_WORKOUT_NOTES;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Parameters for selecting the exercises of one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Workout type (e.g. "push", "pull", "legs", "full_body")
    pub workout_type: String,
    /// Target muscle groups
    #[serde(default)]
    pub muscle_groups: BTreeSet<String>,
    /// Available equipment
    #[serde(default)]
    pub equipment: BTreeSet<String>,
    /// Number of exercises wanted
    pub exercise_count: u32,
    /// Candidates the selection must draw from, in caller order
    #[serde(default)]
    pub available_exercises: Vec<CandidateExercise>,
    /// Training goal
    pub goal: TrainingGoal,
    /// Experience level (e.g. "beginner", "intermediate", "advanced")
    pub experience_level: String,
    /// Target intensity as a percentage of max effort
    #[serde(default)]
    pub intensity_percent: Option<f64>,
    /// Multiplier applied to the usual training volume
    #[serde(default)]
    pub volume_modifier: Option<f64>,
    /// Whether this workout falls in a deload week
    #[serde(default)]
    pub is_deload: bool,
    /// Injuries or restrictions to respect
    #[serde(default)]
    pub user_limitations: Option<Vec<String>>,
}

impl SelectionRequest {
    /// Create a request with no candidates, muscle groups or equipment
    #[must_use]
    pub fn new(
        workout_type: impl Into<String>,
        goal: TrainingGoal,
        experience_level: impl Into<String>,
        exercise_count: u32,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            muscle_groups: BTreeSet::new(),
            equipment: BTreeSet::new(),
            exercise_count,
            available_exercises: Vec::new(),
            goal,
            experience_level: experience_level.into(),
            intensity_percent: None,
            volume_modifier: None,
            is_deload: false,
            user_limitations: None,
        }
    }

    /// Set the target muscle groups
    #[must_use]
    pub fn with_muscle_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.muscle_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Set the available equipment
    #[must_use]
    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    /// Set the candidate exercises
    #[must_use]
    pub fn with_exercises(mut self, exercises: Vec<CandidateExercise>) -> Self {
        self.available_exercises = exercises;
        self
    }

    /// Set intensity and volume modifiers
    #[must_use]
    pub const fn with_modifiers(
        mut self,
        intensity_percent: Option<f64>,
        volume_modifier: Option<f64>,
    ) -> Self {
        self.intensity_percent = intensity_percent;
        self.volume_modifier = volume_modifier;
        self
    }

    /// Mark the workout as a deload
    #[must_use]
    pub const fn with_deload(mut self, is_deload: bool) -> Self {
        self.is_deload = is_deload;
        self
    }

    /// Set user limitations
    #[must_use]
    pub fn with_limitations(mut self, limitations: Vec<String>) -> Self {
        self.user_limitations = Some(limitations);
        self
    }

    /// Identifiers a selection may reference
    #[must_use]
    pub fn available_ids(&self) -> HashSet<&str> {
        self.available_exercises
            .iter()
            .map(|exercise| exercise.id.as_str())
            .collect()
    }

    /// Look up a candidate by identifier
    #[must_use]
    pub fn candidate(&self, exercise_id: &str) -> Option<&CandidateExercise> {
        self.available_exercises
            .iter()
            .find(|exercise| exercise.id == exercise_id)
    }
}

/// One exercise placed in a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSelection {
    /// Identifier of a candidate from the request
    pub exercise_id: String,
    /// Display name
    pub exercise_name: String,
    /// Working sets
    pub sets: u32,
    /// Rep prescription, possibly a range such as "8-12"
    pub reps: String,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Coaching notes
    pub notes: Option<String>,
    /// 1-based position within the workout
    pub order: u32,
    /// Exercises sharing a group are performed back-to-back
    pub superset_group: Option<String>,
}

/// Exercises selected for one workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// Selected exercises in workout order
    pub exercises: Vec<ExerciseSelection>,
    /// Notes about the whole workout
    pub workout_notes: Option<String>,
    /// Expected session length
    pub estimated_duration_minutes: u32,
}

impl SelectionResponse {
    /// Whether this response came from the deterministic fallback
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.workout_notes.as_deref() == Some(FALLBACK_WORKOUT_NOTES)
    }
}

// ABOUTME: Deterministic LLM-free exercise selection used when the model path fails
// ABOUTME: Compound-first ordering with goal-based rep schemes and deload set reduction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::selection::{
    rep_schemes, DELOAD_MIN_SETS, FALLBACK_MINUTES_PER_EXERCISE, FALLBACK_OVERHEAD_MINUTES,
    FALLBACK_WORKOUT_NOTES,
};
use crate::models::{
    CandidateExercise, ExerciseSelection, SelectionRequest, SelectionResponse, TrainingGoal,
};

/// Sets, reps and rest applied uniformly to every fallback exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepScheme {
    /// Rep prescription
    pub reps: &'static str,
    /// Working sets before any deload reduction
    pub sets: u32,
    /// Rest between sets
    pub rest_seconds: u32,
}

impl From<(&'static str, u32, u32)> for RepScheme {
    fn from((reps, sets, rest_seconds): (&'static str, u32, u32)) -> Self {
        Self {
            reps,
            sets,
            rest_seconds,
        }
    }
}

impl RepScheme {
    /// Sets after applying the deload reduction, if any
    #[must_use]
    pub fn working_sets(&self, is_deload: bool) -> u32 {
        if is_deload {
            self.sets.saturating_sub(1).max(DELOAD_MIN_SETS)
        } else {
            self.sets
        }
    }
}

/// Rep scheme for a training goal
#[must_use]
pub fn rep_scheme(goal: &TrainingGoal) -> RepScheme {
    match goal {
        TrainingGoal::Strength => rep_schemes::STRENGTH,
        TrainingGoal::Hypertrophy => rep_schemes::HYPERTROPHY,
        TrainingGoal::Endurance => rep_schemes::ENDURANCE,
        TrainingGoal::WeightLoss => rep_schemes::WEIGHT_LOSS,
        TrainingGoal::GeneralFitness => rep_schemes::GENERAL_FITNESS,
        TrainingGoal::SportSpecific => rep_schemes::SPORT_SPECIFIC,
        TrainingGoal::Other(_) => rep_schemes::UNKNOWN,
    }
    .into()
}

/// Select exercises without a model.
///
/// Candidates are ordered compound-first, then by name, and the first
/// `exercise_count` are taken. Pure: the same request always yields the
/// same response, and an empty candidate list yields an empty workout.
#[must_use]
pub fn fallback_selection(request: &SelectionRequest) -> SelectionResponse {
    let mut ranked: Vec<&CandidateExercise> = request.available_exercises.iter().collect();
    ranked.sort_by(|a, b| {
        (!a.is_compound(), a.name.as_str()).cmp(&(!b.is_compound(), b.name.as_str()))
    });

    let scheme = rep_scheme(&request.goal);
    let sets = scheme.working_sets(request.is_deload);

    let exercises: Vec<ExerciseSelection> = ranked
        .into_iter()
        .take(request.exercise_count as usize)
        .zip(1..)
        .map(|(exercise, order)| ExerciseSelection {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.display_name().to_owned(),
            sets,
            reps: scheme.reps.to_owned(),
            rest_seconds: scheme.rest_seconds,
            notes: None,
            order,
            superset_group: None,
        })
        .collect();

    let estimated_duration_minutes =
        exercises.len() as u32 * FALLBACK_MINUTES_PER_EXERCISE + FALLBACK_OVERHEAD_MINUTES;

    SelectionResponse {
        exercises,
        workout_notes: Some(FALLBACK_WORKOUT_NOTES.to_owned()),
        estimated_duration_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_scheme_table() {
        let cases = [
            (TrainingGoal::Strength, ("3-5", 4, 150)),
            (TrainingGoal::Hypertrophy, ("8-12", 4, 90)),
            (TrainingGoal::Endurance, ("15-20", 3, 60)),
            (TrainingGoal::WeightLoss, ("12-15", 3, 45)),
            (TrainingGoal::GeneralFitness, ("10-15", 3, 60)),
            (TrainingGoal::SportSpecific, ("6-10", 4, 90)),
            (TrainingGoal::Other("mobility".to_owned()), ("8-12", 3, 60)),
        ];
        for (goal, expected) in cases {
            assert_eq!(rep_scheme(&goal), RepScheme::from(expected), "goal {goal}");
        }
    }

    #[test]
    fn test_deload_floors_at_two_sets() {
        let four = RepScheme::from(rep_schemes::HYPERTROPHY);
        assert_eq!(four.working_sets(true), 3);
        assert_eq!(four.working_sets(false), 4);

        let three = RepScheme::from(rep_schemes::ENDURANCE);
        assert_eq!(three.working_sets(true), 2);

        let two = RepScheme {
            reps: "5",
            sets: 2,
            rest_seconds: 60,
        };
        assert_eq!(two.working_sets(true), 2);
    }
}

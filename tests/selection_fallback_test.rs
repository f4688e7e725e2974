// ABOUTME: Integration tests for deterministic fallback exercise selection
// ABOUTME: Validates compound-first ordering, rep schemes, deload reduction, and duration estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::push_request;
use pierre_program_api::constants::selection::FALLBACK_WORKOUT_NOTES;
use pierre_program_api::models::{CandidateExercise, SelectionRequest, TrainingGoal};
use pierre_program_api::selection::fallback_selection;

#[test]
fn test_compound_exercises_come_first_then_by_name() {
    let response = fallback_selection(&push_request(4));

    let ids: Vec<_> = response.exercises.iter().map(|e| e.exercise_id.as_str()).collect();
    assert_eq!(ids, ["bench", "ohp", "lateral_raise", "tricep_pushdown"]);
    let orders: Vec<_> = response.exercises.iter().map(|e| e.order).collect();
    assert_eq!(orders, [1, 2, 3, 4]);
}

#[test]
fn test_takes_only_the_requested_count() {
    let response = fallback_selection(&push_request(2));

    assert_eq!(response.exercises.len(), 2);
    assert!(response.exercises.iter().all(|e| e.exercise_id == "bench" || e.exercise_id == "ohp"));
    assert_eq!(response.estimated_duration_minutes, 2 * 8 + 10);
    assert_eq!(response.workout_notes.as_deref(), Some(FALLBACK_WORKOUT_NOTES));
    assert!(response.is_fallback());
}

#[test]
fn test_count_larger_than_candidates_returns_all() {
    let response = fallback_selection(&push_request(10));
    assert_eq!(response.exercises.len(), 4);
    assert_eq!(response.estimated_duration_minutes, 42);
}

#[test]
fn test_goal_rep_scheme_applies_to_every_exercise() {
    let mut request = push_request(3);
    request.goal = TrainingGoal::Strength;

    let response = fallback_selection(&request);

    for exercise in &response.exercises {
        assert_eq!(exercise.sets, 4);
        assert_eq!(exercise.reps, "3-5");
        assert_eq!(exercise.rest_seconds, 150);
        assert!(exercise.notes.is_none());
        assert!(exercise.superset_group.is_none());
    }
}

#[test]
fn test_deload_reduces_sets_with_floor() {
    let strength = SelectionRequest::new("legs", TrainingGoal::Strength, "advanced", 1)
        .with_exercises(vec![CandidateExercise::new("squat", "Back Squat", "compound")])
        .with_deload(true);
    assert_eq!(fallback_selection(&strength).exercises[0].sets, 3);

    let endurance = SelectionRequest::new("legs", TrainingGoal::Endurance, "advanced", 1)
        .with_exercises(vec![CandidateExercise::new("squat", "Back Squat", "compound")])
        .with_deload(true);
    assert_eq!(fallback_selection(&endurance).exercises[0].sets, 2);
}

#[test]
fn test_strength_squat_and_curl_workout() {
    let request = SelectionRequest::new("legs", TrainingGoal::Strength, "intermediate", 2)
        .with_exercises(vec![
            CandidateExercise::new("curl", "Curl", "isolation"),
            CandidateExercise::new("squat", "Squat", "compound"),
        ]);

    let response = fallback_selection(&request);

    let summary: Vec<_> = response
        .exercises
        .iter()
        .map(|e| {
            (
                e.exercise_id.as_str(),
                e.sets,
                e.reps.as_str(),
                e.rest_seconds,
                e.order,
            )
        })
        .collect();
    assert_eq!(
        summary,
        [("squat", 4, "3-5", 150, 1), ("curl", 4, "3-5", 150, 2)]
    );
    assert_eq!(response.estimated_duration_minutes, 26);
    assert_eq!(
        response.workout_notes.as_deref(),
        Some("Fallback selection due to LLM unavailability")
    );
}

#[test]
fn test_hypertrophy_deload_drops_one_set() {
    let normal = push_request(2);
    let deload = push_request(2).with_deload(true);

    assert!(fallback_selection(&normal).exercises.iter().all(|e| e.sets == 4));
    assert!(fallback_selection(&deload).exercises.iter().all(|e| e.sets == 3));
}

#[test]
fn test_unknown_goal_uses_default_scheme() {
    let request = SelectionRequest::new("full_body", TrainingGoal::from("mobility"), "beginner", 1)
        .with_exercises(vec![CandidateExercise::new("plank", "Plank", "core")]);

    let exercise = &fallback_selection(&request).exercises[0];
    assert_eq!((exercise.reps.as_str(), exercise.sets, exercise.rest_seconds), ("8-12", 3, 60));
}

#[test]
fn test_empty_candidates_degrade_to_empty_workout() {
    let request = SelectionRequest::new("push", TrainingGoal::Hypertrophy, "beginner", 3);

    let response = fallback_selection(&request);

    assert!(response.exercises.is_empty());
    assert_eq!(response.estimated_duration_minutes, 10);
}

#[test]
fn test_fallback_is_deterministic_regardless_of_input_order() {
    let mut reversed = push_request(4);
    reversed.available_exercises.reverse();

    assert_eq!(fallback_selection(&push_request(4)), fallback_selection(&reversed));
}

#[test]
fn test_missing_name_falls_back_to_id() {
    let request = SelectionRequest::new("pull", TrainingGoal::GeneralFitness, "beginner", 1)
        .with_exercises(vec![CandidateExercise::new("row", "", "compound")]);

    assert_eq!(fallback_selection(&request).exercises[0].exercise_name, "row");
}

#[test]
fn test_request_file_with_extra_candidate_attributes() -> anyhow::Result<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "workout_type": "pull",
            "muscle_groups": ["lats", "biceps"],
            "equipment": ["barbell"],
            "exercise_count": 2,
            "available_exercises": [
                {{"id": "curl", "name": "Barbell Curl", "category": "isolation", "difficulty": 1}},
                {{"id": "row", "category": "compound", "equipment": "barbell"}}
            ],
            "goal": "strength",
            "experience_level": "beginner",
            "is_deload": false
        }}"#
    )?;

    let request: SelectionRequest = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;
    assert_eq!(request.available_exercises[0].attributes["difficulty"], 1);

    let response = fallback_selection(&request);
    let summary: Vec<_> = response
        .exercises
        .iter()
        .map(|e| (e.exercise_id.as_str(), e.exercise_name.as_str()))
        .collect();
    assert_eq!(summary, [("row", "row"), ("curl", "Barbell Curl")]);
    Ok(())
}

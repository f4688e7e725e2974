// ABOUTME: Prompts for LLM-backed exercise selection
// ABOUTME: Fixed system instruction loaded at compile time plus a deterministic user prompt builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Selection Prompts
//!
//! The system prompt lives in a markdown file for easy maintenance. The user
//! prompt is rendered from a [`SelectionRequest`] with no randomness and no
//! I/O: the same request always yields the same text.

use crate::models::{CandidateExercise, SelectionRequest};
use std::collections::BTreeSet;
use std::fmt::Write;

/// System instruction paired with every exercise selection prompt
pub const EXERCISE_SELECTION_SYSTEM_PROMPT: &str = include_str!("exercise_selection_system.md");

/// Placeholder for empty optional sections
const NONE_SPECIFIED: &str = "none specified";

/// Render the user prompt for an exercise selection request
#[must_use]
pub fn build_exercise_selection_prompt(request: &SelectionRequest) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(prompt, "Select exercises for the following workout.");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Workout type: {}", request.workout_type);
    let _ = writeln!(
        prompt,
        "Target muscle groups: {}",
        join_or_none(&request.muscle_groups)
    );
    let _ = writeln!(
        prompt,
        "Available equipment: {}",
        join_or_none(&request.equipment)
    );
    let _ = writeln!(
        prompt,
        "Number of exercises: {}",
        request.exercise_count
    );
    let _ = writeln!(prompt, "Training goal: {}", request.goal);
    let _ = writeln!(prompt, "Experience level: {}", request.experience_level);
    let _ = writeln!(
        prompt,
        "Intensity: {}",
        request
            .intensity_percent
            .map_or_else(|| NONE_SPECIFIED.to_owned(), |pct| format!("{pct}% of max"))
    );
    let _ = writeln!(
        prompt,
        "Volume modifier: {}",
        request
            .volume_modifier
            .map_or_else(|| NONE_SPECIFIED.to_owned(), |modifier| format!("{modifier}x"))
    );
    let _ = writeln!(
        prompt,
        "Deload week: {}",
        if request.is_deload {
            "yes - reduce volume"
        } else {
            "no"
        }
    );
    let _ = writeln!(
        prompt,
        "User limitations: {}",
        request
            .user_limitations
            .as_deref()
            .filter(|limitations| !limitations.is_empty())
            .map_or_else(|| NONE_SPECIFIED.to_owned(), |limitations| limitations.join("; "))
    );
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "Candidate exercises ({}):",
        request.available_exercises.len()
    );
    for exercise in &request.available_exercises {
        let _ = writeln!(prompt, "- {}", describe_candidate(exercise));
    }
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Choose exactly {} exercises from the candidates above and return the JSON object described in your instructions.",
        request.exercise_count
    );

    prompt
}

fn join_or_none(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        NONE_SPECIFIED.to_owned()
    } else {
        values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

fn describe_candidate(exercise: &CandidateExercise) -> String {
    let mut line = format!(
        "id: {}, name: {}, category: {}",
        exercise.id,
        exercise.display_name(),
        if exercise.category.is_empty() {
            "unspecified"
        } else {
            &exercise.category
        }
    );
    for (key, value) in &exercise.attributes {
        let rendered = value
            .as_str()
            .map_or_else(|| value.to_string(), ToOwned::to_owned);
        let _ = write!(line, ", {key}: {rendered}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingGoal;

    fn request() -> SelectionRequest {
        SelectionRequest::new("push", TrainingGoal::Hypertrophy, "intermediate", 2)
            .with_muscle_groups(["triceps", "chest"])
            .with_equipment(["dumbbell", "barbell"])
            .with_exercises(vec![
                CandidateExercise::new("bench", "Bench Press", "compound")
                    .with_attribute("primary_muscle", "chest"),
                CandidateExercise::new("pushdown", "Cable Pushdown", "isolation"),
            ])
    }

    #[test]
    fn test_prompt_embeds_every_parameter() {
        let prompt = build_exercise_selection_prompt(
            &request()
                .with_modifiers(Some(75.0), Some(0.8))
                .with_deload(true)
                .with_limitations(vec!["left shoulder impingement".to_owned()]),
        );

        assert!(prompt.contains("Workout type: push"));
        assert!(prompt.contains("Target muscle groups: chest, triceps"));
        assert!(prompt.contains("Available equipment: barbell, dumbbell"));
        assert!(prompt.contains("Number of exercises: 2"));
        assert!(prompt.contains("Training goal: hypertrophy"));
        assert!(prompt.contains("Experience level: intermediate"));
        assert!(prompt.contains("Intensity: 75% of max"));
        assert!(prompt.contains("Volume modifier: 0.8x"));
        assert!(prompt.contains("Deload week: yes"));
        assert!(prompt.contains("User limitations: left shoulder impingement"));
        assert!(prompt.contains(
            "- id: bench, name: Bench Press, category: compound, primary_muscle: chest"
        ));
        assert!(prompt.contains("- id: pushdown, name: Cable Pushdown, category: isolation"));
    }

    #[test]
    fn test_prompt_marks_missing_optionals() {
        let prompt = build_exercise_selection_prompt(&request());
        assert!(prompt.contains("Intensity: none specified"));
        assert!(prompt.contains("Volume modifier: none specified"));
        assert!(prompt.contains("Deload week: no"));
        assert!(prompt.contains("User limitations: none specified"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_exercise_selection_prompt(&request()),
            build_exercise_selection_prompt(&request())
        );
    }

    #[test]
    fn test_system_prompt_describes_json_contract() {
        assert!(EXERCISE_SELECTION_SYSTEM_PROMPT.contains("\"exercise_id\""));
        assert!(EXERCISE_SELECTION_SYSTEM_PROMPT.contains("estimated_duration_minutes"));
    }
}

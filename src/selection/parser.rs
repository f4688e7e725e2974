// ABOUTME: Validates raw model output into a SelectionResponse
// ABOUTME: Drops exercises outside the candidate set and applies documented field defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};

use super::observer::SelectionObserver;
use crate::constants::selection::{
    DEFAULT_DURATION_MINUTES, DEFAULT_REPS, DEFAULT_REST_SECONDS, DEFAULT_SETS,
};
use crate::errors::SelectionError;
use crate::models::{ExerciseSelection, SelectionRequest, SelectionResponse};

/// Parse and validate raw model output against the request it answers.
///
/// Entries whose `exercise_id` is missing or not among the request's
/// candidates are dropped and reported to `observer`. Surviving entries
/// keep their output order and are numbered `1..=n`.
///
/// # Errors
///
/// Returns [`SelectionError::MalformedOutput`] when `raw` is not a JSON
/// object or its `exercises` field is not an array.
pub fn parse_selection_response(
    raw: &str,
    request: &SelectionRequest,
    observer: &dyn SelectionObserver,
) -> Result<SelectionResponse, SelectionError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| SelectionError::malformed(e.to_string()))?;
    let Value::Object(data) = value else {
        return Err(SelectionError::malformed("expected a JSON object"));
    };

    let entries: &[Value] = match data.get("exercises") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(SelectionError::malformed("`exercises` must be an array")),
    };

    let available = request.available_ids();
    let mut exercises = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(fields) = entry.as_object() else {
            observer.on_invalid_exercise(&SelectionError::invalid_reference(""));
            continue;
        };
        let exercise_id = fields
            .get("exercise_id")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if !available.contains(exercise_id) {
            observer.on_invalid_exercise(&SelectionError::invalid_reference(exercise_id));
            continue;
        }

        let order = exercises.len() as u32 + 1;
        exercises.push(build_selection(exercise_id, fields, request, order));
    }

    Ok(SelectionResponse {
        exercises,
        workout_notes: string_field(&data, "workout_notes"),
        estimated_duration_minutes: u32_field(&data, "estimated_duration_minutes")
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES),
    })
}

fn build_selection(
    exercise_id: &str,
    fields: &Map<String, Value>,
    request: &SelectionRequest,
    order: u32,
) -> ExerciseSelection {
    let exercise_name = string_field(fields, "exercise_name").unwrap_or_else(|| {
        request
            .candidate(exercise_id)
            .map_or(exercise_id, |candidate| candidate.display_name())
            .to_owned()
    });

    ExerciseSelection {
        exercise_id: exercise_id.to_owned(),
        exercise_name,
        sets: u32_field(fields, "sets")
            .filter(|sets| *sets > 0)
            .unwrap_or(DEFAULT_SETS),
        reps: scalar_field(fields, "reps").unwrap_or_else(|| DEFAULT_REPS.to_owned()),
        rest_seconds: u32_field(fields, "rest_seconds").unwrap_or(DEFAULT_REST_SECONDS),
        notes: string_field(fields, "notes"),
        order,
        superset_group: scalar_field(fields, "superset_group"),
    }
}

/// Non-empty string value
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(ToOwned::to_owned)
}

/// Non-empty string, or a number rendered as text
fn scalar_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Number(number) => Some(number.to_string()),
        _ => string_field(fields, key),
    }
}

/// Non-negative integer that fits in `u32`, also accepted as a numeric string
fn u32_field(fields: &Map<String, Value>, key: &str) -> Option<u32> {
    match fields.get(key)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

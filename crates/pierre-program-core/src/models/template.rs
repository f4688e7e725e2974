// ABOUTME: Program template records used by the hybrid template-guided generator
// ABOUTME: Stores reusable multi-week program structures with usage tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::TrainingGoal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A persisted, reusable program structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTemplate {
    /// Template identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Goal the program targets
    pub goal: TrainingGoal,
    /// Experience level the program targets
    pub experience_level: String,
    /// Program length in weeks
    pub duration_weeks: u32,
    /// Week/workout layout, `{"weeks": [{"workouts": [...]}, ...]}`
    pub structure: Value,
    /// Provided by the platform rather than a user
    pub is_system_template: bool,
    /// Creating user for user templates
    pub created_by: Option<String>,
    /// Times the template seeded a program
    pub usage_count: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ProgramTemplate {
    /// Number of workouts in the first week of the structure, if any
    #[must_use]
    pub fn first_week_workout_count(&self) -> Option<usize> {
        self.structure
            .get("weeks")?
            .as_array()?
            .first()?
            .get("workouts")?
            .as_array()
            .map(Vec::len)
    }
}

/// Fields supplied when creating a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProgramTemplate {
    /// Display name
    pub name: String,
    /// Goal the program targets
    pub goal: TrainingGoal,
    /// Experience level the program targets
    pub experience_level: String,
    /// Program length in weeks
    pub duration_weeks: u32,
    /// Week/workout layout
    pub structure: Value,
    /// Provided by the platform rather than a user
    #[serde(default)]
    pub is_system_template: bool,
    /// Creating user for user templates
    #[serde(default)]
    pub created_by: Option<String>,
}

impl NewProgramTemplate {
    /// Materialize a template with a fresh id, zero usage and the current time
    #[must_use]
    pub fn into_template(self) -> ProgramTemplate {
        ProgramTemplate {
            id: Uuid::new_v4(),
            name: self.name,
            goal: self.goal,
            experience_level: self.experience_level,
            duration_weeks: self.duration_weeks,
            structure: self.structure,
            is_system_template: self.is_system_template,
            created_by: self.created_by,
            usage_count: 0,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_with(structure: Value) -> ProgramTemplate {
        NewProgramTemplate {
            name: "Upper/Lower".to_owned(),
            goal: TrainingGoal::Strength,
            experience_level: "intermediate".to_owned(),
            duration_weeks: 8,
            structure,
            is_system_template: true,
            created_by: None,
        }
        .into_template()
    }

    #[test]
    fn test_first_week_workout_count() {
        let template = template_with(json!({
            "weeks": [{"workouts": [{}, {}, {}, {}]}, {"workouts": [{}]}]
        }));
        assert_eq!(template.first_week_workout_count(), Some(4));
        assert_eq!(template.usage_count, 0);
    }

    #[test]
    fn test_first_week_workout_count_missing_structure() {
        assert_eq!(template_with(json!({})).first_week_workout_count(), None);
        assert_eq!(
            template_with(json!({"weeks": []})).first_week_workout_count(),
            None
        );
    }
}

// ABOUTME: Program template repository abstraction for template-guided program generation
// ABOUTME: Read, criteria search, creation and usage tracking over stored templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program Templates
//!
//! [`TemplateRepository`] is the data-access seam used by program-level
//! orchestration to find reusable multi-week structures. The crate ships an
//! in-memory implementation; durable backends implement the same trait.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::constants::templates::{DURATION_TOLERANCE_WEEKS, MAX_PROGRAM_WEEKS, MIN_PROGRAM_WEEKS};
use crate::errors::AppResult;
use crate::models::{NewProgramTemplate, ProgramTemplate, TrainingGoal};

pub use memory::InMemoryTemplateRepository;

/// Filter for [`TemplateRepository::get_by_criteria`]
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCriteria {
    /// Required goal
    pub goal: TrainingGoal,
    /// Required experience level
    pub experience_level: String,
    /// Workouts in the first week, when constrained
    pub sessions_per_week: Option<usize>,
    /// Approximate program length, matched within a tolerance window
    pub duration_weeks: Option<u32>,
}

impl TemplateCriteria {
    /// Criteria on goal and experience level only
    #[must_use]
    pub fn new(goal: TrainingGoal, experience_level: impl Into<String>) -> Self {
        Self {
            goal,
            experience_level: experience_level.into(),
            sessions_per_week: None,
            duration_weeks: None,
        }
    }

    /// Require an exact number of first-week workouts
    #[must_use]
    pub const fn with_sessions_per_week(mut self, sessions: usize) -> Self {
        self.sessions_per_week = Some(sessions);
        self
    }

    /// Require a duration near `weeks`
    #[must_use]
    pub const fn with_duration_weeks(mut self, weeks: u32) -> Self {
        self.duration_weeks = Some(weeks);
        self
    }

    /// Whether `template` satisfies every constraint
    #[must_use]
    pub fn matches(&self, template: &ProgramTemplate) -> bool {
        if template.goal != self.goal || template.experience_level != self.experience_level {
            return false;
        }
        if let Some(weeks) = self.duration_weeks {
            let (min, max) = duration_window(weeks);
            if !(min..=max).contains(&template.duration_weeks) {
                return false;
            }
        }
        self.sessions_per_week
            .is_none_or(|sessions| template.first_week_workout_count() == Some(sessions))
    }
}

/// Inclusive duration bounds accepted for a requested length
#[must_use]
pub fn duration_window(weeks: u32) -> (u32, u32) {
    (
        weeks
            .saturating_sub(DURATION_TOLERANCE_WEEKS)
            .max(MIN_PROGRAM_WEEKS),
        weeks
            .saturating_add(DURATION_TOLERANCE_WEEKS)
            .min(MAX_PROGRAM_WEEKS),
    )
}

/// Storage of program templates
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Template by id
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<ProgramTemplate>>;

    /// Templates matching `criteria`, most used first
    async fn get_by_criteria(&self, criteria: &TemplateCriteria) -> AppResult<Vec<ProgramTemplate>>;

    /// Platform-provided templates, most used first
    async fn get_system_templates(&self) -> AppResult<Vec<ProgramTemplate>>;

    /// Non-system templates created by `user_id`, newest first
    async fn get_user_templates(&self, user_id: &str) -> AppResult<Vec<ProgramTemplate>>;

    /// Store a new template and return it
    async fn create(&self, template: NewProgramTemplate) -> AppResult<ProgramTemplate>;

    /// Increment the usage counter; `false` when no such template exists
    async fn increment_usage_count(&self, id: Uuid) -> AppResult<bool>;
}

// ABOUTME: Candidate exercise records and the training goal enumeration
// ABOUTME: Candidates keep unknown attributes so prompts can surface them to the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::selection::COMPOUND_CATEGORY;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// An exercise the selector may choose from.
///
/// Only `id` is required. Any key beyond `id`, `name` and `category`
/// (primary muscle, equipment, difficulty, ...) is kept in `attributes`
/// in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateExercise {
    /// Stable exercise identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Movement category (e.g. "compound", "isolation")
    #[serde(default)]
    pub category: String,
    /// Additional selection-relevant attributes
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl CandidateExercise {
    /// Create a candidate without extra attributes
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an extra attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Name to show for this exercise, falling back to the id
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Whether this is a multi-joint compound movement
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.category == COMPOUND_CATEGORY
    }
}

/// Training goal driving rep schemes and prompt guidance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainingGoal {
    /// Maximal strength
    Strength,
    /// Muscle growth
    Hypertrophy,
    /// Muscular endurance
    Endurance,
    /// Fat loss
    WeightLoss,
    /// Balanced fitness
    GeneralFitness,
    /// Athletic performance for a sport
    SportSpecific,
    /// Any goal this crate does not recognize, kept verbatim
    Other(String),
}

impl TrainingGoal {
    /// Wire name of the goal
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Endurance => "endurance",
            Self::WeightLoss => "weight_loss",
            Self::GeneralFitness => "general_fitness",
            Self::SportSpecific => "sport_specific",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for TrainingGoal {
    fn from(value: &str) -> Self {
        match value {
            "strength" => Self::Strength,
            "hypertrophy" => Self::Hypertrophy,
            "endurance" => Self::Endurance,
            "weight_loss" => Self::WeightLoss,
            "general_fitness" => Self::GeneralFitness,
            "sport_specific" => Self::SportSpecific,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for TrainingGoal {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TrainingGoal> for String {
    fn from(goal: TrainingGoal) -> Self {
        match goal {
            TrainingGoal::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

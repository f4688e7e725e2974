// ABOUTME: Error kinds produced along the exercise selection pipeline
// ABOUTME: Feeds the orchestrator retry loop and converts into AppError for reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Failure raised while obtaining or interpreting a model-backed selection.
///
/// `MalformedOutput`, `EmptyResponse` and `TransportFailure` consume one
/// attempt of the orchestrator retry budget. `InvalidReference` is only
/// ever reported to observers: offending entries are filtered out of the
/// parsed result instead of failing it.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Model output is not a well-formed JSON object
    #[error("malformed model output: {reason}")]
    MalformedOutput {
        /// Parser diagnostic
        reason: String,
    },

    /// Model selected an exercise id that is not among the candidates
    #[error("model selected unknown exercise id '{exercise_id}'")]
    InvalidReference {
        /// The rejected identifier (empty when the entry carried none)
        exercise_id: String,
    },

    /// The model call returned no content
    #[error("empty response from LLM")]
    EmptyResponse,

    /// The model call itself failed (network, auth, rate limit, timeout)
    #[error("model invocation failed: {source}")]
    TransportFailure {
        /// Underlying provider error
        #[source]
        source: AppError,
    },
}

impl SelectionError {
    /// Create a malformed-output error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            reason: reason.into(),
        }
    }

    /// Create an invalid-reference error
    #[must_use]
    pub fn invalid_reference(exercise_id: impl Into<String>) -> Self {
        Self::InvalidReference {
            exercise_id: exercise_id.into(),
        }
    }
}

impl From<AppError> for SelectionError {
    fn from(source: AppError) -> Self {
        Self::TransportFailure { source }
    }
}

impl From<SelectionError> for AppError {
    fn from(error: SelectionError) -> Self {
        match error {
            SelectionError::MalformedOutput { reason } => {
                Self::new(ErrorCode::SerializationError, reason)
            }
            SelectionError::InvalidReference { exercise_id } => Self::new(
                ErrorCode::InvalidInput,
                format!("unknown exercise id '{exercise_id}'"),
            ),
            SelectionError::EmptyResponse => {
                Self::external_service("LLM", "Empty response from LLM")
            }
            SelectionError::TransportFailure { source } => source,
        }
    }
}

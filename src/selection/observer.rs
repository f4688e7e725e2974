// ABOUTME: Diagnostic hook for the exercise selection pipeline
// ABOUTME: Observers see cache hits, dropped exercises, failed attempts, and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, error, warn};

use crate::errors::SelectionError;
use crate::models::SelectionRequest;

/// Receives diagnostic events that never alter a selection result.
///
/// Every method has an empty default body so implementations only
/// override what they care about.
pub trait SelectionObserver: Send + Sync {
    /// A cached response was served for `fingerprint`
    fn on_cache_hit(&self, _fingerprint: &str) {}

    /// A model entry was dropped; `error` is always `InvalidReference`
    fn on_invalid_exercise(&self, _error: &SelectionError) {}

    /// Model attempt `attempt` of `max_attempts` failed
    fn on_attempt_failed(&self, _attempt: u32, _max_attempts: u32, _error: &SelectionError) {}

    /// The deterministic fallback answered after `attempts` model attempts
    fn on_fallback(&self, _request: &SelectionRequest, _attempts: u32) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {}

/// Observer that reports events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_cache_hit(&self, fingerprint: &str) {
        debug!("Using cached exercise selection for {fingerprint}");
    }

    fn on_invalid_exercise(&self, error: &SelectionError) {
        warn!("LLM selected invalid exercise: {error}");
    }

    fn on_attempt_failed(&self, attempt: u32, max_attempts: u32, error: &SelectionError) {
        warn!("Exercise selection attempt {attempt}/{max_attempts} failed: {error}");
    }

    fn on_fallback(&self, request: &SelectionRequest, attempts: u32) {
        if attempts == 0 {
            debug!(
                workout_type = %request.workout_type,
                "No candidates to choose from, using fallback selection"
            );
        } else {
            error!(
                workout_type = %request.workout_type,
                "All {attempts} LLM attempts failed, using fallback selection"
            );
        }
    }
}

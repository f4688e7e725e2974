// ABOUTME: Exercise selection constants for parser defaults, rep schemes, and model calls
// ABOUTME: Values shared by the response parser, fallback selector, and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default number of sets when the model omits them
pub const DEFAULT_SETS: u32 = 3;

/// Default rep prescription when the model omits it
pub const DEFAULT_REPS: &str = "8-12";

/// Default rest between sets when the model omits it
pub const DEFAULT_REST_SECONDS: u32 = 90;

/// Default workout duration when the model omits it
pub const DEFAULT_DURATION_MINUTES: u32 = 45;

/// Total model attempts per selection (1 initial + 2 retries)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for selection calls
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Output token bound for selection calls
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Per-attempt model call timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Upper bound for the delay between two attempts
pub const MAX_RETRY_BACKOFF_MS: u64 = 5_000;

/// Workout notes attached to every fallback result
pub const FALLBACK_WORKOUT_NOTES: &str = "Fallback selection due to LLM unavailability";

/// Category that the fallback ranks ahead of all others
pub const COMPOUND_CATEGORY: &str = "compound";

/// Minutes budgeted per selected exercise in fallback duration estimates
pub const FALLBACK_MINUTES_PER_EXERCISE: u32 = 8;

/// Fixed warm-up/cool-down overhead in fallback duration estimates
pub const FALLBACK_OVERHEAD_MINUTES: u32 = 10;

/// Floor for sets after a deload reduction
pub const DELOAD_MIN_SETS: u32 = 2;

/// Rep schemes per training goal: (reps, base sets, rest seconds)
pub mod rep_schemes {
    /// Heavy, low-rep work with long rest
    pub const STRENGTH: (&str, u32, u32) = ("3-5", 4, 150);
    /// Moderate reps for muscle growth
    pub const HYPERTROPHY: (&str, u32, u32) = ("8-12", 4, 90);
    /// High reps, short rest
    pub const ENDURANCE: (&str, u32, u32) = ("15-20", 3, 60);
    /// Circuit-style density
    pub const WEIGHT_LOSS: (&str, u32, u32) = ("12-15", 3, 45);
    /// Balanced general training
    pub const GENERAL_FITNESS: (&str, u32, u32) = ("10-15", 3, 60);
    /// Power-oriented athletic work
    pub const SPORT_SPECIFIC: (&str, u32, u32) = ("6-10", 4, 90);
    /// Used when the goal is not recognized
    pub const UNKNOWN: (&str, u32, u32) = ("8-12", 3, 60);
}

// ABOUTME: Exercise selector configuration loaded from environment variables
// ABOUTME: Retry budget, per-attempt timeout, backoff, and model call parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LlmProviderType;
use crate::constants::selection::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, MAX_RETRY_BACKOFF_MS,
};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Settings for [`crate::selection::ExerciseSelector`]
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Total model attempts per selection (at least 1)
    pub max_attempts: u32,
    /// Chat model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token bound
    pub max_tokens: u32,
    /// Timeout applied to each model call
    pub attempt_timeout: Duration,
    /// Base delay between attempts; attempt `n` waits `n * retry_backoff`
    pub retry_backoff: Duration,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            attempt_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_backoff: Duration::ZERO,
        }
    }
}

impl SelectorConfig {
    /// Environment variable for the total attempt budget
    pub const MAX_ATTEMPTS_ENV_VAR: &'static str = "PIERRE_SELECTOR_MAX_ATTEMPTS";
    /// Environment variable for the sampling temperature
    pub const TEMPERATURE_ENV_VAR: &'static str = "PIERRE_SELECTOR_TEMPERATURE";
    /// Environment variable for the output token bound
    pub const MAX_TOKENS_ENV_VAR: &'static str = "PIERRE_SELECTOR_MAX_TOKENS";
    /// Environment variable for the per-attempt timeout
    pub const TIMEOUT_SECS_ENV_VAR: &'static str = "PIERRE_SELECTOR_TIMEOUT_SECS";
    /// Environment variable for the retry backoff base
    pub const RETRY_BACKOFF_MS_ENV_VAR: &'static str = "PIERRE_SELECTOR_RETRY_BACKOFF_MS";

    /// Load configuration from environment variables
    ///
    /// Unset variables take defaults; unparseable ones take defaults and
    /// log a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backoff_ms: u64 = parse_env(Self::RETRY_BACKOFF_MS_ENV_VAR, 0);

        Self {
            max_attempts: parse_env(Self::MAX_ATTEMPTS_ENV_VAR, defaults.max_attempts).max(1),
            model: LlmProviderType::model_from_env().unwrap_or(defaults.model),
            temperature: parse_env(Self::TEMPERATURE_ENV_VAR, defaults.temperature),
            max_tokens: parse_env(Self::MAX_TOKENS_ENV_VAR, defaults.max_tokens),
            attempt_timeout: Duration::from_secs(parse_env(
                Self::TIMEOUT_SECS_ENV_VAR,
                DEFAULT_TIMEOUT_SECS,
            )),
            retry_backoff: Duration::from_millis(backoff_ms.min(MAX_RETRY_BACKOFF_MS)),
        }
    }

    /// Override the attempt budget (clamped to at least 1)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Override the per-attempt timeout
    #[must_use]
    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Override the retry backoff base (capped)
    #[must_use]
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff.min(Duration::from_millis(MAX_RETRY_BACKOFF_MS));
        self
    }

    /// Delay before the given 1-based retry, capped
    #[must_use]
    pub fn backoff_before(&self, retry: u32) -> Duration {
        self.retry_backoff
            .saturating_mul(retry)
            .min(Duration::from_millis(MAX_RETRY_BACKOFF_MS))
    }
}

fn parse_env<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value '{raw}' for {name}, using default");
            default
        }),
        Err(_) => default,
    }
}

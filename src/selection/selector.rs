// ABOUTME: Exercise selection orchestrator owning the cache, retry loop, and fallback decision
// ABOUTME: Always returns a usable workout; model failures degrade to the deterministic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument};

use super::cache::{fingerprint, SelectionCache};
use super::fallback::fallback_selection;
use super::model::{LlmSelectionModel, SelectionModel};
use super::observer::{SelectionObserver, TracingObserver};
use super::parser::parse_selection_response;
use crate::config::{LlmProviderType, SelectorConfig};
use crate::errors::{AppError, AppResult, ErrorCode, SelectionError};
use crate::llm::{
    build_exercise_selection_prompt, LlmProvider, OpenAiCompatibleProvider,
    EXERCISE_SELECTION_SYSTEM_PROMPT,
};
use crate::models::{SelectionRequest, SelectionResponse};

/// Selects workout exercises through a model with retries, caching and fallback.
///
/// One instance is meant to be shared (for example behind an `Arc`) by many
/// concurrent callers; the model call is the only suspension point.
pub struct ExerciseSelector {
    model: Arc<dyn SelectionModel>,
    config: SelectorConfig,
    cache: SelectionCache,
    observer: Arc<dyn SelectionObserver>,
}

impl ExerciseSelector {
    /// Create a selector over any selection model
    #[must_use]
    pub fn new(model: Arc<dyn SelectionModel>, config: SelectorConfig) -> Self {
        Self {
            model,
            config,
            cache: SelectionCache::new(),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Create a selector that talks to a chat completion provider
    #[must_use]
    pub fn from_provider<P: LlmProvider + 'static>(provider: P, config: SelectorConfig) -> Self {
        let model = LlmSelectionModel::new(provider, &config);
        Self::new(Arc::new(model), config)
    }

    /// Create a selector from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured provider cannot be initialized
    /// (for example a missing `OPENAI_API_KEY`).
    pub fn from_env() -> AppResult<Self> {
        let config = SelectorConfig::from_env();
        let provider = OpenAiCompatibleProvider::from_env(LlmProviderType::from_env(), &config.model)?;
        info!(
            "Exercise selector using {} ({}), {} attempts per selection",
            provider.display_name(),
            config.model,
            config.max_attempts
        );
        Ok(Self::from_provider(provider, config))
    }

    /// Replace the diagnostic observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SelectionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select exercises for one workout.
    ///
    /// With `use_cache`, a previous model-backed answer for the same
    /// [`fingerprint`] is returned without calling the model, and a fresh
    /// model-backed answer is stored. Identical requests arriving while the
    /// model runs wait for that run instead of starting their own; if it
    /// fails they all receive their own fallback. Fallback answers are never
    /// cached. This never fails: exhausting every attempt yields the fallback.
    #[instrument(skip(self, request), fields(workout_type = %request.workout_type, exercise_count = request.exercise_count))]
    pub async fn select(&self, request: &SelectionRequest, use_cache: bool) -> SelectionResponse {
        if request.exercise_count == 0 || request.available_exercises.is_empty() {
            self.observer.on_fallback(request, 0);
            return fallback_selection(request);
        }

        if !use_cache {
            return self.select_uncached(request).await;
        }

        let key = fingerprint(request);
        if let Some(cached) = self.cached(&key).await {
            return cached;
        }

        let outcome = self
            .cache
            .run_flight(&key, || async {
                // A flight that finished just before we joined may have filled the entry
                if let Some(cached) = self.cache.get(&key).await {
                    return Ok(cached);
                }
                match self.select_with_model(request).await {
                    Ok(response) => {
                        let response = Arc::new(response);
                        self.cache.insert(key.clone(), Arc::clone(&response)).await;
                        Ok(response)
                    }
                    Err(attempts) => Err(attempts),
                }
            })
            .await;

        match outcome {
            Ok(response) => response.as_ref().clone(),
            Err(attempts) => self.fallback(request, attempts),
        }
    }

    /// Select without touching the model, as the fallback would
    #[must_use]
    pub fn select_fallback(&self, request: &SelectionRequest) -> SelectionResponse {
        fallback_selection(request)
    }

    /// Evict every cached selection
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        debug!("Exercise selection cache cleared");
    }

    /// Number of cached selections
    pub async fn cache_len(&self) -> usize {
        self.cache.len().await
    }

    async fn cached(&self, key: &str) -> Option<SelectionResponse> {
        let cached = self.cache.get(key).await?;
        self.observer.on_cache_hit(key);
        Some(cached.as_ref().clone())
    }

    async fn select_uncached(&self, request: &SelectionRequest) -> SelectionResponse {
        match self.select_with_model(request).await {
            Ok(response) => response,
            Err(attempts) => self.fallback(request, attempts),
        }
    }

    fn fallback(&self, request: &SelectionRequest, attempts: u32) -> SelectionResponse {
        self.observer.on_fallback(request, attempts);
        fallback_selection(request)
    }

    /// Run the retry loop; on exhaustion returns the number of attempts made
    async fn select_with_model(&self, request: &SelectionRequest) -> Result<SelectionResponse, u32> {
        let user_prompt = build_exercise_selection_prompt(request);
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                let delay = self.config.backoff_before(attempt - 1);
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }

            match self.attempt(&user_prompt, request).await {
                Ok(response) => {
                    debug!(
                        attempt,
                        selected = response.exercises.len(),
                        "LLM exercise selection succeeded"
                    );
                    return Ok(response);
                }
                Err(error) => self.observer.on_attempt_failed(attempt, max_attempts, &error),
            }
        }

        Err(max_attempts)
    }

    async fn attempt(
        &self,
        user_prompt: &str,
        request: &SelectionRequest,
    ) -> Result<SelectionResponse, SelectionError> {
        let raw = timeout(
            self.config.attempt_timeout,
            self.model
                .generate(EXERCISE_SELECTION_SYSTEM_PROMPT, user_prompt),
        )
        .await
        .map_err(|_| {
            SelectionError::from(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!(
                    "model call timed out after {}s",
                    self.config.attempt_timeout.as_secs_f32()
                ),
            ))
        })??;

        parse_selection_response(&raw, request, self.observer.as_ref())
    }
}

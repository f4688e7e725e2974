// ABOUTME: Injectable model boundary for exercise selection
// ABOUTME: One-method capability (prompt in, JSON text out) plus an adapter over any LlmProvider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::debug;

use crate::config::SelectorConfig;
use crate::errors::SelectionError;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, ResponseFormat};

/// Source of raw exercise selections.
///
/// Implementations return the model's text (expected to be a JSON object)
/// or a [`SelectionError`]. Tests substitute deterministic stubs.
#[async_trait]
pub trait SelectionModel: Send + Sync {
    /// Produce raw output for the given system instruction and user prompt
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, SelectionError>;
}

/// [`SelectionModel`] backed by a chat completion provider in JSON mode
#[derive(Debug)]
pub struct LlmSelectionModel<P> {
    provider: P,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl<P: LlmProvider> LlmSelectionModel<P> {
    /// Wrap a provider using the model parameters from `config`
    #[must_use]
    pub fn new(provider: P, config: &SelectorConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Chat request sent for one selection attempt
    #[must_use]
    pub fn chat_request(&self, system_prompt: &str, user_prompt: &str) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_prompt),
        ])
        .with_model(&self.model)
        .with_temperature(self.temperature)
        .with_max_tokens(self.max_tokens)
        .with_response_format(ResponseFormat::JsonObject)
    }
}

#[async_trait]
impl<P: LlmProvider> SelectionModel for LlmSelectionModel<P> {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SelectionError> {
        let request = self.chat_request(system_prompt, user_prompt);
        let response = self.provider.complete(&request).await?;

        if let Some(usage) = response.usage {
            debug!(
                provider = self.provider.name(),
                model = %response.model,
                total_tokens = usage.total_tokens,
                "Exercise selection completion received"
            );
        }

        if response.content.trim().is_empty() {
            return Err(SelectionError::EmptyResponse);
        }
        Ok(response.content)
    }
}

// ABOUTME: Integration tests for the LLM-backed selection model adapter
// ABOUTME: Uses an in-process provider stub to check request parameters and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{model_answer, push_request};
use pierre_program_api::config::SelectorConfig;
use pierre_program_api::errors::{AppError, ErrorCode, SelectionError};
use pierre_program_api::llm::{
    ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, MessageRole, ResponseFormat,
};
use pierre_program_api::selection::{ExerciseSelector, LlmSelectionModel, SelectionModel};
use std::sync::Mutex;

/// Provider stub returning a fixed outcome and remembering the last request
struct StubProvider {
    outcome: Result<String, ErrorCode>,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubProvider {
    fn new(outcome: Result<String, ErrorCode>) -> Self {
        Self {
            outcome,
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::openai()
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(code) => Err(AppError::new(*code, "stub failure")),
        }
    }
}

#[test]
fn test_chat_request_uses_json_mode_and_config() {
    let config = SelectorConfig::default();
    let model = LlmSelectionModel::new(StubProvider::new(Ok(String::new())), &config);

    let request = model.chat_request("system text", "user text");

    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(request.messages[1].role, MessageRole::User);
    assert_eq!(request.messages[1].content, "user text");
    assert_eq!(request.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(request.max_tokens, Some(2000));
    assert_eq!(request.response_format, ResponseFormat::JsonObject);
}

#[tokio::test]
async fn test_generate_returns_content() {
    let model = LlmSelectionModel::new(
        StubProvider::new(Ok("{\"exercises\": []}".to_owned())),
        &SelectorConfig::default(),
    );

    let raw = model.generate("system", "user").await.unwrap();
    assert_eq!(raw, "{\"exercises\": []}");
}

#[tokio::test]
async fn test_blank_content_is_empty_response() {
    let model = LlmSelectionModel::new(
        StubProvider::new(Ok("   ".to_owned())),
        &SelectorConfig::default(),
    );

    let error = model.generate("system", "user").await.unwrap_err();
    assert!(matches!(error, SelectionError::EmptyResponse));
}

#[tokio::test]
async fn test_provider_error_is_transport_failure() {
    let model = LlmSelectionModel::new(
        StubProvider::new(Err(ErrorCode::ExternalRateLimited)),
        &SelectorConfig::default(),
    );

    let error = model.generate("system", "user").await.unwrap_err();
    match error {
        SelectionError::TransportFailure { source } => {
            assert_eq!(source.code, ErrorCode::ExternalRateLimited);
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_selector_from_provider_end_to_end() {
    let selector = ExerciseSelector::from_provider(
        StubProvider::new(Ok(model_answer(&["bench", "lateral_raise"]))),
        SelectorConfig::default(),
    );

    let response = selector.select(&push_request(2), true).await;

    assert!(!response.is_fallback());
    assert_eq!(response.exercises.len(), 2);
    assert_eq!(selector.cache_len().await, 1);
}

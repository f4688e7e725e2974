// ABOUTME: Integration tests for environment-driven selector and provider configuration
// ABOUTME: Validates defaults, overrides, clamping, and provider credential handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_program_api::config::{LlmProviderType, SelectorConfig};
use pierre_program_api::errors::ErrorCode;
use pierre_program_api::llm::OpenAiCompatibleConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const SELECTOR_VARS: [&str; 7] = [
    SelectorConfig::MAX_ATTEMPTS_ENV_VAR,
    SelectorConfig::TEMPERATURE_ENV_VAR,
    SelectorConfig::MAX_TOKENS_ENV_VAR,
    SelectorConfig::TIMEOUT_SECS_ENV_VAR,
    SelectorConfig::RETRY_BACKOFF_MS_ENV_VAR,
    LlmProviderType::ENV_VAR,
    LlmProviderType::MODEL_ENV_VAR,
];

fn clear_env() {
    for var in SELECTOR_VARS {
        env::remove_var(var);
    }
    for var in ["OPENAI_API_KEY", "OPENAI_BASE_URL", "LOCAL_LLM_BASE_URL", "LOCAL_LLM_API_KEY"] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_selector_config_defaults() {
    clear_env();

    let config = SelectorConfig::from_env();

    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.max_tokens, 2000);
    assert_eq!(config.attempt_timeout, Duration::from_secs(60));
    assert_eq!(config.retry_backoff, Duration::ZERO);
}

#[test]
#[serial]
fn test_selector_config_overrides() {
    clear_env();
    env::set_var(SelectorConfig::MAX_ATTEMPTS_ENV_VAR, "5");
    env::set_var(SelectorConfig::TEMPERATURE_ENV_VAR, "0.2");
    env::set_var(SelectorConfig::MAX_TOKENS_ENV_VAR, "1024");
    env::set_var(SelectorConfig::TIMEOUT_SECS_ENV_VAR, "15");
    env::set_var(SelectorConfig::RETRY_BACKOFF_MS_ENV_VAR, "250");
    env::set_var(LlmProviderType::MODEL_ENV_VAR, "gpt-4o");

    let config = SelectorConfig::from_env();

    assert_eq!(config.max_attempts, 5);
    assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.max_tokens, 1024);
    assert_eq!(config.attempt_timeout, Duration::from_secs(15));
    assert_eq!(config.retry_backoff, Duration::from_millis(250));
    assert_eq!(config.model, "gpt-4o");
    clear_env();
}

#[test]
#[serial]
fn test_selector_config_clamps_and_ignores_garbage() {
    clear_env();
    env::set_var(SelectorConfig::MAX_ATTEMPTS_ENV_VAR, "0");
    env::set_var(SelectorConfig::MAX_TOKENS_ENV_VAR, "lots");
    env::set_var(SelectorConfig::RETRY_BACKOFF_MS_ENV_VAR, "600000");

    let config = SelectorConfig::from_env();

    assert_eq!(config.max_attempts, 1);
    assert_eq!(config.max_tokens, 2000);
    assert_eq!(config.retry_backoff, Duration::from_millis(5_000));
    clear_env();
}

#[test]
#[serial]
fn test_provider_type_from_env() {
    clear_env();
    assert_eq!(LlmProviderType::from_env(), LlmProviderType::OpenAi);

    for value in ["local", "Ollama", "vllm", "localai"] {
        env::set_var(LlmProviderType::ENV_VAR, value);
        assert_eq!(LlmProviderType::from_env(), LlmProviderType::Local, "{value}");
    }

    env::set_var(LlmProviderType::ENV_VAR, "something-else");
    assert_eq!(LlmProviderType::from_env(), LlmProviderType::OpenAi);
    clear_env();
}

#[test]
#[serial]
fn test_openai_requires_api_key() {
    clear_env();

    let error = OpenAiCompatibleConfig::from_env(LlmProviderType::OpenAi, "gpt-4o-mini").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("OPENAI_BASE_URL", "https://proxy.example.com/v1");
    let config = OpenAiCompatibleConfig::from_env(LlmProviderType::OpenAi, "gpt-4o-mini").unwrap();
    assert_eq!(config.base_url, "https://proxy.example.com/v1");
    assert_eq!(config.default_model, "gpt-4o-mini");
    assert!(config.capabilities.supports_json_mode());
    assert!(!format!("{config:?}").contains("sk-test"));
    clear_env();
}

#[test]
#[serial]
fn test_local_provider_detected_from_base_url() {
    clear_env();

    let ollama = OpenAiCompatibleConfig::from_env(LlmProviderType::Local, "qwen2.5").unwrap();
    assert_eq!(ollama.provider_name, "ollama");
    assert!(ollama.api_key.is_none());

    env::set_var("LOCAL_LLM_BASE_URL", "http://gpu-box:8000/v1");
    env::set_var("LOCAL_LLM_API_KEY", "local-key");
    let vllm = OpenAiCompatibleConfig::from_env(LlmProviderType::Local, "qwen2.5").unwrap();
    assert_eq!(vllm.provider_name, "vllm");
    assert_eq!(vllm.base_url, "http://gpu-box:8000/v1");
    assert_eq!(vllm.api_key.as_deref(), Some("local-key"));
    clear_env();
}

// ABOUTME: Configuration management module for exercise selection settings
// ABOUTME: Environment-only configuration for the selector and its LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Pierre program API
//!
//! All settings come from environment variables; there are no config files.
//!
//! - **Selector**: retry budget, model call parameters, timeouts
//! - **Types**: LLM provider selection

/// Exercise selector configuration
pub mod selector;
/// Shared configuration types
pub mod types;

pub use selector::SelectorConfig;
pub use types::LlmProviderType;

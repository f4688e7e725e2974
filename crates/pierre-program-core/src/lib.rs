// ABOUTME: Core types and constants for Pierre program generation
// ABOUTME: Foundation crate with error handling, selection defaults, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Program Core
//!
//! Foundation crate providing shared types and constants for exercise
//! selection and program templates. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `SelectionError`
//! - **constants**: Selection defaults, rep schemes, and template search bounds
//! - **models**: Candidate exercises, selection requests/responses, program templates

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (exercises, selections, templates)
pub mod models;

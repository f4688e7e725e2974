// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for exercise selection and program templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Exercise selection defaults, rep schemes, and model call parameters
pub mod selection;
/// Program template search bounds
pub mod templates;

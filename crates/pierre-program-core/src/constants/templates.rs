// ABOUTME: Program template search constants
// ABOUTME: Duration tolerance window and clamp bounds for criteria lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Templates within this many weeks of the requested duration match
pub const DURATION_TOLERANCE_WEEKS: u32 = 2;

/// Lower clamp of the duration search window
pub const MIN_PROGRAM_WEEKS: u32 = 4;

/// Upper clamp of the duration search window
pub const MAX_PROGRAM_WEEKS: u32 = 52;

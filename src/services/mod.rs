// ABOUTME: Service layer for recording workouts
// ABOUTME: Log saving with week capture, composite dual-saves, and set input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Front-end agnostic operations that mutate the log store. The CLI and the
//! integration tests both go through these.

/// Saving single and composite log entries
pub mod log_service;

/// Parsing of `62,5x8@2` style set input
pub mod set_input;

// ABOUTME: Re-exports the shared error taxonomy for the application crate
// ABOUTME: AppError, ErrorCode, and AppResult live in gymgo-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Errors are defined in `gymgo-core` so the analytics crate and this crate
//! share one taxonomy. The `sqlx` and `reqwest` conversions are enabled via
//! the `all-errors` feature.

pub use gymgo_core::errors::{AppError, AppResult, ErrorCode};

// ABOUTME: Core types and constants for the GymGo workout log
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # GymGo Core
//!
//! Foundation crate shared by the analytics engine and the application
//! crate. It changes rarely, so the rest of the workspace recompiles less.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Program defaults, storage keys, cache naming
//! - **models**: Sets, log entries, exercises, routines, settings

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

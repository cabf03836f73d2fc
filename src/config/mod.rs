// ABOUTME: Configuration management module
// ABOUTME: Environment-driven settings for storage, content source, and program length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, ContentSource, DatabaseUrl, Environment};

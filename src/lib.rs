// ABOUTME: Main library entry point for the GymGo workout log
// ABOUTME: Storage plugins, content loading, offline cache, screens, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `GymGo`
//!
//! A personal workout log. The user follows a multi-week routine, logs sets
//! (weight, reps, reps in reserve) per exercise per day, and compares weeks
//! using an estimated one-rep max.
//!
//! ## Architecture
//!
//! - **`gymgo-core`**: error taxonomy, domain models, constants
//! - **`gymgo-intelligence`**: strength metrics, best sets, weekly rows,
//!   double progression, trends
//! - **this crate**: persistence (`SQLite` and in-memory), static content,
//!   the offline response cache, screen view models, and the `gymgo` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gymgo::config::environment::AppConfig;
//! use gymgo::database_plugins::{factory::Database, LogStore};
//! use gymgo::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     let settings = database.get_settings().await?;
//!     println!("Program started on {:?}", settings.program_start_date);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Static routine and technique content
pub mod content;

/// Log store abstraction with `SQLite` and in-memory backends
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Logging configuration
pub mod logging;

/// Offline response cache with network-first and cache-first policies
pub mod offline;

/// Screen view models with explicit view state
pub mod screens;

/// Log-saving services
pub mod services;

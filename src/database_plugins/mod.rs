// ABOUTME: Log store abstraction for the GymGo workout log
// ABOUTME: Plugin architecture with SQLite and in-memory backends behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Log Store
//!
//! Persistence for the settings singleton and per-date, per-exercise log
//! entries. Each call is its own unit of work; there are no multi-entry
//! transactions. Saving an entry whose `(date, exercise_id)` already exists
//! replaces it (last writer wins).

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use gymgo_core::models::{LogEntry, Settings, SettingsPatch};

pub mod factory;
pub mod memory;
pub mod sqlite;

/// Core storage abstraction trait
///
/// All backends implement this trait so screens and services stay
/// independent of where entries live.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Prepare the store and ensure the settings singleton exists
    async fn init(&self) -> AppResult<()>;

    /// Current settings; a default record when none was ever stored
    async fn get_settings(&self) -> AppResult<Settings>;

    /// Merge `patch` into the stored settings and return the result
    async fn set_settings(&self, patch: &SettingsPatch) -> AppResult<Settings>;

    /// Entry for `(date, exercise_id)`, if any
    async fn get_log(&self, date: NaiveDate, exercise_id: &str) -> AppResult<Option<LogEntry>>;

    /// Insert or replace the entry keyed by `(date, exercise_id)`
    async fn save_log(&self, entry: &LogEntry) -> AppResult<LogEntry>;

    /// Every entry of one exercise, in no particular order
    async fn list_logs_by_exercise(&self, exercise_id: &str) -> AppResult<Vec<LogEntry>>;
}

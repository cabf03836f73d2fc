// ABOUTME: Core data models for the GymGo workout log
// ABOUTME: Re-exports sets, log entries, exercises, routines, techniques, and settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire names follow the JSON documents the app reads and writes
//! (`camelCase`: `repRange`, `exerciseId`, `programStartDate`).
//!
//! ## Core Models
//!
//! - `Set`: one performed effort (weight, reps, reps in reserve)
//! - `LogEntry`: the persisted unit, keyed by `(date, exerciseId)`
//! - `Exercise`: read-only routine item, possibly composite
//! - `Routine` / `Technique`: static content loaded at startup
//! - `Settings`: singleton holding the program start date

mod exercise;
mod lenient;
mod log;
mod routine;
mod settings;

pub use exercise::{Exercise, Movement, MovementLabel, RepRange, RestSpec};
pub use log::{log_key, LogEntry, Set};
pub use routine::{Day, Program, Routine, ScheduleSlot, Technique};
pub use settings::{Settings, SettingsPatch};

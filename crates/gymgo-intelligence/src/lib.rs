// ABOUTME: Progression analytics engine for the GymGo workout log
// ABOUTME: Strength estimates, best sets, weekly rows, double progression, and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # GymGo Intelligence
//!
//! Pure computation over log entries. Nothing here touches storage or the
//! network; every function is total and returns a neutral value (`0`,
//! `None`, an empty row) for incomplete data.
//!
//! ## Modules
//!
//! - **strength**: Epley e1RM, volume, program week
//! - **`best_set`**: strongest set of a collection
//! - **weekly**: per-program-week aggregation
//! - **progression**: double-progression next target
//! - **trend**: week-over-week deltas, headline, sparkline
//! - **composite**: giant-set decomposition into A/B movements
//! - **schedule**: weekday schedule navigation

/// Strength estimates and program week arithmetic
pub mod strength;

/// Best-set reduction
pub mod best_set;

/// Weekly aggregation
pub mod weekly;

/// Double-progression advisor
pub mod progression;

/// Week-over-week comparison
pub mod trend;

/// Composite exercise decomposition
pub mod composite;

/// Schedule navigation
pub mod schedule;

pub use best_set::{best_set_from_log, describe, most_recent_excluding, pick_best_set, BestSet};
pub use composite::CompositeExt;
pub use progression::{suggest_next_target, Suggestion};
pub use strength::{estimated_one_rep_max, program_week, volume};
pub use trend::{headline, sparkline, week_over_week_delta, DeltaRow, Headline, Metric, Sparkline};
pub use weekly::{aggregate_by_week, WeekRow};

// ABOUTME: Benchmark fixtures generating deterministic workout log history
// ABOUTME: Sessions spread across program weeks with varying loads and reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for reproducible performance measurements.

use chrono::{Duration, NaiveDate};
use gymgo_core::models::{LogEntry, Set};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogBatchSize {
    /// One block of three sessions a week
    Small,
    /// Several years of training on one exercise
    Large,
}

impl LogBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 24,
            Self::Large => 1_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "24_sessions",
            Self::Large => "1000_sessions",
        }
    }
}

/// Generate `count` sessions of `exercise_id`, two days apart, weeks wrapping at `weeks_total`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_logs(exercise_id: &str, count: usize, weeks_total: u32) -> Vec<LogEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| {
            let date = start + Duration::days(index as i64 * 2);
            let week = (index as u32 / 3) % weeks_total + 1;
            let base = 40.0 + (index % 20) as f64 * 2.5;
            let sets = (1..=4)
                .map(|set_no| {
                    let reps = 6 + ((index + set_no as usize * 7) % 7) as u32;
                    Set::new(set_no, base, reps, Some(2))
                })
                .collect();
            LogEntry {
                date,
                week,
                day_id: "upper".to_owned(),
                exercise_id: exercise_id.to_owned(),
                sets,
            }
        })
        .collect()
}

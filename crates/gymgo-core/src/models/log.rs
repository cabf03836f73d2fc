// ABOUTME: Set and LogEntry models, the persisted unit of the workout log
// ABOUTME: A log entry is keyed by (date, exercise id); re-logging replaces it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use crate::constants::storage::LOG_KEY_SEPARATOR;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One performed effort
///
/// A set with `weight <= 0` or `reps == 0` is incomplete: it is stored as
/// typed but contributes nothing to strength, volume, or "sets done".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    /// 1-based position within the session
    pub set_no: u32,
    /// Load in kilograms
    #[serde(default, deserialize_with = "lenient::weight")]
    pub weight: f64,
    /// Repetitions performed
    #[serde(default, deserialize_with = "lenient::count")]
    pub reps: u32,
    /// Reps in reserve, if recorded
    #[serde(default, deserialize_with = "lenient::optional_rir")]
    pub rir: Option<i32>,
}

impl Set {
    /// Create a set
    #[must_use]
    pub const fn new(set_no: u32, weight: f64, reps: u32, rir: Option<i32>) -> Self {
        Self {
            set_no,
            weight,
            reps,
            rir,
        }
    }

    /// Blank placeholder row shown before anything is logged
    #[must_use]
    pub const fn blank(set_no: u32) -> Self {
        Self::new(set_no, 0.0, 0, None)
    }

    /// Whether the set counts toward strength, volume and sets done
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.weight > 0.0 && self.reps > 0
    }
}

/// Build the storage key of a log entry
#[must_use]
pub fn log_key(date: NaiveDate, exercise_id: &str) -> String {
    format!("{}{LOG_KEY_SEPARATOR}{exercise_id}", date.format("%Y-%m-%d"))
}

/// The persisted unit: all sets of one exercise on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Program week captured at log time; never recomputed
    pub week: u32,
    /// Routine day the session belonged to
    pub day_id: String,
    /// Exercise id, or a virtual sub-movement id (`<id>__A`)
    pub exercise_id: String,
    /// Sets in entry order
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl LogEntry {
    /// Storage key `(date, exercise_id)`
    #[must_use]
    pub fn key(&self) -> String {
        log_key(self.date, &self.exercise_id)
    }

    /// Number of complete sets
    #[must_use]
    pub fn sets_done(&self) -> usize {
        self.sets.iter().filter(|set| set.is_complete()).count()
    }
}

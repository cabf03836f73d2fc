// ABOUTME: Static routine and technique documents loaded once at startup
// ABOUTME: Program length, routine days, weekday schedule, and technique library entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Exercise;
use crate::constants::program::DEFAULT_WEEKS_TOTAL;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Program block metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Number of weeks in the block
    #[serde(default = "default_weeks")]
    pub weeks: u32,
}

const fn default_weeks() -> u32 {
    DEFAULT_WEEKS_TOTAL
}

impl Default for Program {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS_TOTAL,
        }
    }
}

/// One routine day (e.g. "Upper A")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Day identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Exercises in performance order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Assignment of a routine day to a weekday (1 = Monday .. 7 = Sunday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    /// ISO weekday number
    pub week_day: u8,
    /// Routine day planned for that weekday
    pub day_id: String,
}

/// The routine document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Program metadata
    #[serde(default)]
    pub program: Program,
    /// Routine days
    #[serde(default)]
    pub days: Vec<Day>,
    /// Weekday schedule
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

impl Routine {
    /// Program length in weeks, never zero
    #[must_use]
    pub fn weeks_total(&self) -> u32 {
        self.program.weeks.max(1)
    }

    /// Find a routine day by id
    #[must_use]
    pub fn find_day(&self, day_id: &str) -> Option<&Day> {
        self.days.iter().find(|day| day.id == day_id)
    }

    /// Find an exercise by id across all days
    #[must_use]
    pub fn find_exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.days
            .iter()
            .flat_map(|day| &day.exercises)
            .find(|exercise| exercise.id == exercise_id)
    }

    /// Every exercise once, in first-appearance order
    #[must_use]
    pub fn unique_exercises(&self) -> Vec<&Exercise> {
        let mut seen = HashSet::new();
        self.days
            .iter()
            .flat_map(|day| &day.exercises)
            .filter(|exercise| seen.insert(exercise.id.as_str()))
            .collect()
    }
}

/// A technique library entry (rest-pause, drop set, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// Identifier referenced by `Exercise::technique_id`
    pub id: String,
    /// Short label
    pub label: String,
    /// Optional emoji shown next to the label
    #[serde(default)]
    pub emoji: Option<String>,
    /// One-line summary
    #[serde(default)]
    pub summary: String,
    /// Step-by-step instructions
    #[serde(default)]
    pub howto: Vec<String>,
    /// Worked example
    #[serde(default)]
    pub example: String,
}

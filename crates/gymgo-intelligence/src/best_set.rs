// ABOUTME: Best-set reduction over logged sets using the Epley estimate
// ABOUTME: Deterministic: strictly greater replaces, ties keep the first seen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::strength::set_one_rep_max;
use chrono::NaiveDate;
use gymgo_core::constants::display::EMPTY_PLACEHOLDER;
use gymgo_core::models::{LogEntry, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The strongest set of a collection together with its estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSet {
    /// The winning set as logged
    pub set: Set,
    /// Its estimated one-rep max
    pub e1rm: f64,
}

impl BestSet {
    /// Load of the winning set
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.set.weight
    }

    /// Reps of the winning set
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.set.reps
    }
}

impl fmt::Display for BestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", format_weight(self.set.weight), self.set.reps)
    }
}

/// Render a weight without a trailing `.0` (`60`, `62.5`)
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if weight.fract().abs() < f64::EPSILON {
        format!("{weight:.0}")
    } else {
        let text = format!("{weight:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

/// `weight×reps` of an optional best set, or the placeholder
#[must_use]
pub fn describe(best: Option<&BestSet>) -> String {
    best.map_or_else(|| EMPTY_PLACEHOLDER.to_owned(), ToString::to_string)
}

/// Pick the set with the highest estimated one-rep max
///
/// The first set is the initial incumbent whatever its estimate, so a
/// collection of only incomplete sets returns its first set. Empty input
/// returns `None`.
#[must_use]
pub fn pick_best_set<'a, I>(sets: I) -> Option<BestSet>
where
    I: IntoIterator<Item = &'a Set>,
{
    let mut best: Option<BestSet> = None;
    for set in sets {
        let e1rm = set_one_rep_max(set);
        match &best {
            Some(incumbent) if e1rm <= incumbent.e1rm => {}
            _ => {
                best = Some(BestSet {
                    set: set.clone(),
                    e1rm,
                });
            }
        }
    }
    best
}

/// Best set of a single log entry; `None` for a missing or empty entry
#[must_use]
pub fn best_set_from_log(entry: Option<&LogEntry>) -> Option<BestSet> {
    entry.and_then(|entry| pick_best_set(&entry.sets))
}

/// Latest entry logged on a date other than `exclude`
///
/// Stores return entries unordered, so this sorts by date descending.
#[must_use]
pub fn most_recent_excluding(logs: &[LogEntry], exclude: NaiveDate) -> Option<&LogEntry> {
    logs.iter()
        .filter(|entry| entry.date != exclude)
        .max_by_key(|entry| entry.date)
}

// ABOUTME: Weekly aggregation of an exercise's log history into program weeks
// ABOUTME: Groups by the week stored at log time and reduces each week to best set and volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::best_set::{pick_best_set, BestSet};
use crate::strength::volume;
use gymgo_core::models::LogEntry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One program week of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRow {
    /// 1-based program week
    pub week: u32,
    /// Strongest set logged that week
    pub best_set: Option<BestSet>,
    /// Estimated one-rep max of the best set (0 when none)
    pub e1rm: f64,
    /// Total volume across every set of the week
    pub volume: f64,
}

impl WeekRow {
    /// Row for a week with nothing logged
    #[must_use]
    pub const fn empty(week: u32) -> Self {
        Self {
            week,
            best_set: None,
            e1rm: 0.0,
            volume: 0.0,
        }
    }
}

/// Bucket logs into weeks `1..=weeks_total`
///
/// Entries are grouped by their stored `week`, never recomputed from the
/// date, so moving the program start date does not reclassify history.
/// Entries whose stored week falls outside the block are ignored.
#[must_use]
pub fn aggregate_by_week(logs: &[LogEntry], weeks_total: u32) -> Vec<WeekRow> {
    let weeks_total = weeks_total.max(1);
    let mut by_week: HashMap<u32, Vec<&LogEntry>> = HashMap::new();
    for entry in logs {
        by_week.entry(entry.week).or_default().push(entry);
    }
    // Stores return entries unordered; ties between sessions resolve by date
    for entries in by_week.values_mut() {
        entries.sort_by_key(|entry| entry.date);
    }

    let ignored = by_week
        .keys()
        .filter(|week| !(1..=weeks_total).contains(*week))
        .count();
    if ignored > 0 {
        debug!(ignored, weeks_total, "log weeks outside the program block");
    }

    (1..=weeks_total)
        .into_par_iter()
        .map(|week| {
            let Some(entries) = by_week.get(&week) else {
                return WeekRow::empty(week);
            };
            let all_sets = entries.iter().copied().flat_map(|entry| &entry.sets);
            let best_set = pick_best_set(all_sets.clone());
            WeekRow {
                week,
                e1rm: best_set.as_ref().map_or(0.0, |best| best.e1rm),
                volume: volume(all_sets),
                best_set,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gymgo_core::models::Set;

    fn entry(day: u32, week: u32, sets: Vec<Set>) -> LogEntry {
        LogEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            week,
            day_id: "lower".into(),
            exercise_id: "squat".into(),
            sets,
        }
    }

    #[test]
    fn test_empty_history_gives_empty_weeks() {
        let rows = aggregate_by_week(&[], 8);
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|row| row.best_set.is_none() && row.volume.abs() < f64::EPSILON));
        assert_eq!(rows[7].week, 8);
    }

    #[test]
    fn test_sets_from_several_sessions_are_merged() {
        let logs = vec![
            entry(5, 1, vec![Set::new(1, 100.0, 5, None)]),
            entry(8, 1, vec![Set::new(1, 100.0, 6, None), Set::blank(2)]),
            entry(12, 2, vec![Set::new(1, 105.0, 5, None)]),
        ];
        let rows = aggregate_by_week(&logs, 8);

        let week1 = &rows[0];
        assert_eq!(week1.best_set.as_ref().unwrap().reps(), 6);
        assert!((week1.volume - 1100.0).abs() < f64::EPSILON);
        assert!((week1.e1rm - 120.0).abs() < 1e-9);

        let week2 = &rows[1];
        assert!((week2.volume - 525.0).abs() < f64::EPSILON);
        assert!(rows[2].best_set.is_none());
    }

    #[test]
    fn test_grouping_uses_stored_week_not_date() {
        // Logged on Jan 30 but captured as week 1 at the time
        let logs = vec![entry(30, 1, vec![Set::new(1, 80.0, 8, None)])];
        let rows = aggregate_by_week(&logs, 8);
        assert!(rows[0].best_set.is_some());
        assert!(rows[4].best_set.is_none());
    }

    #[test]
    fn test_out_of_block_weeks_are_ignored() {
        let logs = vec![entry(5, 9, vec![Set::new(1, 80.0, 8, None)])];
        let rows = aggregate_by_week(&logs, 8);
        assert!(rows.iter().all(|row| row.best_set.is_none()));
    }
}

// ABOUTME: Strength metrics: Epley one-rep-max estimate, training volume, program week
// ABOUTME: Total functions that coerce missing or malformed numbers to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gymgo_core::constants::program::{DAYS_PER_WEEK, EPLEY_REPS_DIVISOR};
use gymgo_core::models::Set;

/// Negative, NaN and infinite inputs become zero
#[inline]
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Epley estimated one-rep max: `weight * (1 + reps / 30)`
///
/// Returns `0.0` unless both `weight` and `reps` are positive.
#[must_use]
pub fn estimated_one_rep_max(weight: f64, reps: f64) -> f64 {
    let weight = sanitize(weight);
    let reps = sanitize(reps);
    if weight <= 0.0 || reps <= 0.0 {
        return 0.0;
    }
    weight * (1.0 + reps / EPLEY_REPS_DIVISOR)
}

/// Estimated one-rep max of a logged set
#[must_use]
pub fn set_one_rep_max(set: &Set) -> f64 {
    estimated_one_rep_max(set.weight, f64::from(set.reps))
}

/// Total volume `Σ weight × reps`; incomplete sets add nothing
#[must_use]
pub fn volume<'a, I>(sets: I) -> f64
where
    I: IntoIterator<Item = &'a Set>,
{
    sets.into_iter()
        .map(|set| sanitize(set.weight) * f64::from(set.reps))
        .sum()
}

/// Count of complete sets (`weight > 0` and `reps > 0`)
#[must_use]
pub fn sets_done<'a, I>(sets: I) -> usize
where
    I: IntoIterator<Item = &'a Set>,
{
    sets.into_iter().filter(|set| set.is_complete()).count()
}

/// 1-based program week of `as_of`, clamped into `[1, weeks_total]`
///
/// Without a start date the program is always in week 1. The difference is
/// counted in whole calendar days, so daylight-saving shifts cannot move a
/// date across a week boundary.
#[must_use]
pub fn program_week(start: Option<NaiveDate>, as_of: NaiveDate, weeks_total: u32) -> u32 {
    let Some(start) = start else {
        return 1;
    };
    let weeks_total = i64::from(weeks_total.max(1));
    let days = (as_of - start).num_days();
    let week = days.div_euclid(DAYS_PER_WEEK) + 1;
    week.clamp(1, weeks_total) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_e1rm_zero_for_non_positive_inputs() {
        for (weight, reps) in [(0.0, 10.0), (100.0, 0.0), (-5.0, 10.0), (100.0, -1.0)] {
            assert!(estimated_one_rep_max(weight, reps).abs() < f64::EPSILON);
        }
        assert!(estimated_one_rep_max(f64::NAN, 5.0).abs() < f64::EPSILON);
        assert!(estimated_one_rep_max(100.0, f64::INFINITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_e1rm_epley() {
        let e1rm = estimated_one_rep_max(100.0, 10.0);
        assert!((e1rm - 133.333_333).abs() < 1e-3);
    }

    #[test]
    fn test_volume_ignores_zero_rep_sets() {
        let sets = [Set::new(1, 100.0, 5, None), Set::new(2, 80.0, 0, None)];
        assert!((volume(&sets) - 500.0).abs() < f64::EPSILON);
        assert!(volume(std::iter::empty::<&Set>()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_program_week_without_start_is_one() {
        assert_eq!(program_week(None, date(2030, 6, 1), 8), 1);
    }

    #[test]
    fn test_program_week_boundaries() {
        let start = date(2026, 1, 1);
        assert_eq!(program_week(Some(start), date(2026, 1, 1), 8), 1);
        assert_eq!(program_week(Some(start), date(2026, 1, 7), 8), 1);
        assert_eq!(program_week(Some(start), date(2026, 1, 8), 8), 2);
    }

    #[test]
    fn test_program_week_clamps() {
        let start = date(2026, 1, 1);
        assert_eq!(program_week(Some(start), date(2025, 12, 1), 8), 1);
        let far = start + chrono::Duration::weeks(100);
        assert_eq!(program_week(Some(start), far, 8), 8);
    }

    #[test]
    fn test_program_week_across_dst_change() {
        // European DST starts 2026-03-29; calendar arithmetic is unaffected
        let start = date(2026, 3, 23);
        assert_eq!(program_week(Some(start), date(2026, 3, 30), 8), 2);
    }
}

// ABOUTME: Weekday schedule navigation over the routine document
// ABOUTME: Picks the planned day for a date and cycles to the next scheduled workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use gymgo_core::models::{Day, Exercise, Routine};

/// Short weekday names, Monday first
const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// ISO weekday number: Monday = 1 .. Sunday = 7
#[must_use]
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// Short name of an ISO weekday number, `D<n>` when out of range
#[must_use]
pub fn weekday_name(week_day: u8) -> String {
    usize::from(week_day)
        .checked_sub(1)
        .and_then(|index| WEEKDAY_NAMES.get(index))
        .map_or_else(|| format!("D{week_day}"), |name| (*name).to_owned())
}

/// Routine day planned for `date`
///
/// Falls back to the first schedule entry, then to the first routine day.
#[must_use]
pub fn pick_day_for_date(routine: &Routine, date: NaiveDate) -> Option<&str> {
    let week_day = weekday_of(date);
    routine
        .schedule
        .iter()
        .find(|slot| slot.week_day == week_day)
        .or_else(|| routine.schedule.first())
        .map(|slot| slot.day_id.as_str())
        .or_else(|| routine.days.first().map(|day| day.id.as_str()))
}

/// Scheduled day following `current` in weekday order, wrapping around
///
/// An unknown or absent current day restarts at the earliest scheduled
/// weekday. Without a schedule the first routine day is returned.
#[must_use]
pub fn next_day_in_schedule<'a>(routine: &'a Routine, current: Option<&str>) -> Option<&'a str> {
    let mut slots: Vec<_> = routine.schedule.iter().collect();
    if slots.is_empty() {
        return routine.days.first().map(|day| day.id.as_str());
    }
    // Stable sort keeps authoring order between slots sharing a weekday
    slots.sort_by_key(|slot| slot.week_day);

    let next = current
        .and_then(|day_id| slots.iter().position(|slot| slot.day_id == day_id))
        .map_or(0, |index| (index + 1) % slots.len());
    slots.get(next).map(|slot| slot.day_id.as_str())
}

/// Day with `day_id`, or the first routine day
#[must_use]
pub fn resolve_day<'a>(routine: &'a Routine, day_id: Option<&str>) -> Option<&'a Day> {
    day_id
        .and_then(|id| routine.find_day(id))
        .or_else(|| routine.days.first())
}

/// Rest prescription of an exercise: `90s` or `60–90s`
#[must_use]
pub fn rest_text(exercise: &Exercise) -> String {
    exercise.rest_sec.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymgo_core::models::{Program, ScheduleSlot};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(id: &str) -> Day {
        Day {
            id: id.into(),
            title: id.to_uppercase(),
            exercises: vec![],
        }
    }

    fn slot(week_day: u8, day_id: &str) -> ScheduleSlot {
        ScheduleSlot {
            week_day,
            day_id: day_id.into(),
        }
    }

    fn routine() -> Routine {
        Routine {
            program: Program::default(),
            days: vec![day("upper"), day("lower"), day("full")],
            // Authored out of weekday order on purpose
            schedule: vec![slot(5, "full"), slot(1, "upper"), slot(3, "lower")],
        }
    }

    #[test]
    fn test_weekday_monday_is_one() {
        assert_eq!(weekday_of(date(2026, 1, 5)), 1);
        assert_eq!(weekday_of(date(2026, 1, 11)), 7);
        assert_eq!(weekday_name(3), "Wed");
        assert_eq!(weekday_name(9), "D9");
    }

    #[test]
    fn test_pick_day_by_weekday() {
        let routine = routine();
        assert_eq!(pick_day_for_date(&routine, date(2026, 1, 7)), Some("lower"));
    }

    #[test]
    fn test_unscheduled_weekday_uses_first_slot() {
        let routine = routine();
        // Sunday has no slot: first authored slot wins
        assert_eq!(pick_day_for_date(&routine, date(2026, 1, 11)), Some("full"));
    }

    #[test]
    fn test_no_schedule_uses_first_day() {
        let mut routine = routine();
        routine.schedule.clear();
        assert_eq!(pick_day_for_date(&routine, date(2026, 1, 11)), Some("upper"));
        assert_eq!(next_day_in_schedule(&routine, Some("lower")), Some("upper"));

        assert_eq!(pick_day_for_date(&Routine::default(), date(2026, 1, 11)), None);
    }

    #[test]
    fn test_next_workout_wraps_in_weekday_order() {
        let routine = routine();
        assert_eq!(next_day_in_schedule(&routine, Some("upper")), Some("lower"));
        assert_eq!(next_day_in_schedule(&routine, Some("lower")), Some("full"));
        assert_eq!(next_day_in_schedule(&routine, Some("full")), Some("upper"));
        assert_eq!(next_day_in_schedule(&routine, Some("ghost")), Some("upper"));
        assert_eq!(next_day_in_schedule(&routine, None), Some("upper"));
    }

    #[test]
    fn test_resolve_day_falls_back_to_first() {
        let routine = routine();
        assert_eq!(resolve_day(&routine, Some("lower")).unwrap().id, "lower");
        assert_eq!(resolve_day(&routine, Some("ghost")).unwrap().id, "upper");
    }
}

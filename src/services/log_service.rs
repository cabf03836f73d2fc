// ABOUTME: Log saving service capturing the program week at log time
// ABOUTME: Composite exercises save both movements concurrently with independent outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::LogStore;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use gymgo_core::models::{Exercise, LogEntry, Movement, Set};
use gymgo_intelligence::{program_week, CompositeExt};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of saving one half of a composite exercise
#[derive(Debug)]
pub struct HalfOutcome {
    /// Movement that was saved
    pub movement: Movement,
    /// Stored entry, or why it was not stored
    pub result: AppResult<LogEntry>,
}

impl HalfOutcome {
    /// Whether the entry was stored
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of a composite dual-save; the halves succeed or fail independently
#[derive(Debug)]
pub struct CompositeSaveOutcome {
    /// Movement A
    pub a: HalfOutcome,
    /// Movement B
    pub b: HalfOutcome,
}

impl CompositeSaveOutcome {
    /// Both halves stored
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.a.is_saved() && self.b.is_saved()
    }

    /// Neither half stored
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.a.is_saved() && !self.b.is_saved()
    }

    /// Message naming the missing half when exactly one failed
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        let (saved, failed) = match (&self.a.result, &self.b.result) {
            (Ok(_), Err(error)) => (&self.a.movement, (&self.b.movement, error)),
            (Err(error), Ok(_)) => (&self.b.movement, (&self.a.movement, error)),
            _ => return None,
        };
        let (failed_movement, error) = failed;
        Some(format!(
            "{} ({}) was saved but {} ({}) was not: {}. Log {} again.",
            saved.label, saved.name, failed_movement.label, failed_movement.name, error.message,
            failed_movement.name
        ))
    }
}

/// Records log entries against a store
pub struct LogService<S: ?Sized> {
    store: Arc<S>,
    weeks_total: u32,
}

impl<S> LogService<S>
where
    S: LogStore + ?Sized,
{
    /// Service over `store` for a program of `weeks_total` weeks
    #[must_use]
    pub const fn new(store: Arc<S>, weeks_total: u32) -> Self {
        Self { store, weeks_total }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Program week of `date` under the current settings
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be read
    pub async fn week_for(&self, date: NaiveDate) -> AppResult<u32> {
        let settings = self.store.get_settings().await?;
        Ok(program_week(
            settings.program_start_date,
            date,
            self.weeks_total,
        ))
    }

    /// Sets to pre-fill an editor with: the stored sets, else blank rows
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn draft_sets(
        &self,
        date: NaiveDate,
        movement_id: &str,
        planned_sets: u32,
    ) -> AppResult<Vec<Set>> {
        let existing = self.store.get_log(date, movement_id).await?;
        Ok(match existing {
            Some(entry) if !entry.sets.is_empty() => entry.sets,
            _ => (1..=planned_sets).map(Set::blank).collect(),
        })
    }

    /// Replace the entry for `(date, exercise_id)`
    ///
    /// The week is computed from the start date as of now and stored with
    /// the entry; later start date changes do not move it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty id, or a store error
    pub async fn save_sets(
        &self,
        date: NaiveDate,
        day_id: &str,
        exercise_id: &str,
        sets: Vec<Set>,
    ) -> AppResult<LogEntry> {
        let week = self.week_for(date).await?;
        self.save_entry(date, week, day_id, exercise_id, sets).await
    }

    /// Save both movements of a composite exercise concurrently
    ///
    /// Each half is its own unit of work: one may be stored while the other
    /// fails. Inspect [`CompositeSaveOutcome::warning`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the exercise is not composite, or an error
    /// if settings cannot be read
    pub async fn save_composite(
        &self,
        date: NaiveDate,
        day_id: &str,
        exercise: &Exercise,
        sets_a: Vec<Set>,
        sets_b: Vec<Set>,
    ) -> AppResult<CompositeSaveOutcome> {
        let [movement_a, movement_b] = exercise.movements().ok_or_else(|| {
            AppError::invalid_input(format!("{} is not a composite exercise", exercise.id))
        })?;
        let week = self.week_for(date).await?;

        let (result_a, result_b) = tokio::join!(
            self.save_entry(date, week, day_id, &movement_a.id, sets_a),
            self.save_entry(date, week, day_id, &movement_b.id, sets_b),
        );
        let outcome = CompositeSaveOutcome {
            a: HalfOutcome {
                movement: movement_a,
                result: result_a,
            },
            b: HalfOutcome {
                movement: movement_b,
                result: result_b,
            },
        };

        if let Some(message) = outcome.warning() {
            warn!(exercise = %exercise.id, %date, "{message}");
        }
        Ok(outcome)
    }

    async fn save_entry(
        &self,
        date: NaiveDate,
        week: u32,
        day_id: &str,
        exercise_id: &str,
        sets: Vec<Set>,
    ) -> AppResult<LogEntry> {
        if exercise_id.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise id must not be empty"));
        }
        let entry = LogEntry {
            date,
            week,
            day_id: day_id.to_owned(),
            exercise_id: exercise_id.to_owned(),
            sets,
        };
        let saved = self.store.save_log(&entry).await?;
        info!(
            key = %saved.key(),
            week,
            sets_done = saved.sets_done(),
            "Log saved"
        );
        Ok(saved)
    }
}

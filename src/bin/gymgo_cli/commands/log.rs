// ABOUTME: Log commands recording sets for an exercise or a composite movement
// ABOUTME: Composite dual-saves report each half and warn when only one was stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_content;
use crate::helpers::display::display_saved_entry;
use crate::Context;
use chrono::NaiveDate;
use gymgo::content::Content;
use gymgo::errors::{AppError, AppResult};
use gymgo::screens::ViewState;
use gymgo::services::log_service::LogService;
use gymgo::services::set_input::parse_sets;
use gymgo_core::models::{Exercise, MovementLabel};
use gymgo_intelligence::CompositeExt;
use std::sync::Arc;
use tracing::{error, warn};

fn find_exercise<'a>(content: &'a Content, exercise_id: &str) -> AppResult<&'a Exercise> {
    content
        .routine
        .find_exercise(exercise_id)
        .ok_or_else(|| AppError::not_found(format!("Exercise '{exercise_id}'")))
}

fn resolve_day_id(content: &Content, date: NaiveDate, day: Option<String>) -> String {
    day.or_else(|| ViewState::for_date(&content.routine, date).day_id)
        .unwrap_or_default()
}

/// Record one exercise, or one movement of a composite exercise
pub async fn record(
    ctx: &Context,
    exercise_id: &str,
    raw_sets: &[String],
    date: NaiveDate,
    day: Option<String>,
    part: Option<MovementLabel>,
) -> AppResult<()> {
    let sets = parse_sets(raw_sets)?;
    let content = load_content(ctx).await?;
    let exercise = find_exercise(&content, exercise_id)?;

    let target_id = match (exercise.movements(), part) {
        (Some(movements), Some(label)) => movements
            .into_iter()
            .find(|movement| movement.label == label)
            .map(|movement| movement.id)
            .unwrap_or_default(),
        (Some(_), None) => {
            return Err(AppError::invalid_input(format!(
                "{exercise_id} is a composite exercise: pass --part a|b or use log-both"
            )));
        }
        (None, Some(_)) => {
            warn!(exercise = exercise_id, "--part ignored for a regular exercise");
            exercise.id.clone()
        }
        (None, None) => exercise.id.clone(),
    };

    let service = LogService::new(Arc::new(ctx.database.clone()), content.weeks_total());
    let day_id = resolve_day_id(&content, date, day);
    let entry = service.save_sets(date, &day_id, &target_id, sets).await?;
    display_saved_entry(&entry, exercise.sets);
    Ok(())
}

/// Record both movements of a composite exercise concurrently
pub async fn record_both(
    ctx: &Context,
    exercise_id: &str,
    raw_a: &[String],
    raw_b: &[String],
    date: NaiveDate,
    day: Option<String>,
) -> AppResult<()> {
    let sets_a = parse_sets(raw_a)?;
    let sets_b = parse_sets(raw_b)?;
    let content = load_content(ctx).await?;
    let exercise = find_exercise(&content, exercise_id)?;

    let service = LogService::new(Arc::new(ctx.database.clone()), content.weeks_total());
    let day_id = resolve_day_id(&content, date, day);
    let outcome = service
        .save_composite(date, &day_id, exercise, sets_a, sets_b)
        .await?;

    for half in [&outcome.a, &outcome.b] {
        match &half.result {
            Ok(entry) => display_saved_entry(entry, exercise.sets),
            Err(e) => error!(movement = %half.movement.id, "Save failed: {e}"),
        }
    }
    if let Some(message) = outcome.warning() {
        println!("Warning: {message}");
    }
    if outcome.is_failed() {
        return Err(AppError::database(format!(
            "Neither movement of {exercise_id} was saved"
        )));
    }
    Ok(())
}

// ABOUTME: Today command rendering the workout of a date
// ABOUTME: Resolves the routine day from flags, the schedule, or the next workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_content;
use crate::helpers::display::{print_json, render_today};
use crate::Context;
use chrono::NaiveDate;
use gymgo::database_plugins::LogStore;
use gymgo::errors::AppResult;
use gymgo::screens::{today, ViewState};

/// Render the today screen
pub async fn show(ctx: &Context, date: NaiveDate, day: Option<String>, next: bool) -> AppResult<()> {
    let content = load_content(ctx).await?;
    let settings = ctx.database.get_settings().await?;

    let mut state = match day {
        Some(day_id) => today::change_day(&ViewState::new(date, None), &day_id),
        None if date == ctx.today => today::go_today(&content.routine, date),
        None => today::change_date(&content.routine, date),
    };
    if next {
        state = today::next_workout(&content.routine, &state);
    }

    let (view, _state) = today::render(&ctx.database, &content, &settings, state).await?;
    if ctx.json {
        print_json(&view)
    } else {
        render_today(&view);
        Ok(())
    }
}

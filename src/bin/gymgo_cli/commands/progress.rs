// ABOUTME: Progress command comparing program weeks of one exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_content;
use crate::helpers::display::{print_json, render_progress};
use crate::Context;
use gymgo::database_plugins::LogStore;
use gymgo::errors::AppResult;
use gymgo::screens::progress;
use gymgo_intelligence::Metric;

/// Render the progress screen as of today
pub async fn show(ctx: &Context, exercise_id: Option<&str>, metric: Metric) -> AppResult<()> {
    let content = load_content(ctx).await?;
    let settings = ctx.database.get_settings().await?;
    let view = progress::render(
        &ctx.database,
        &content,
        &settings,
        exercise_id,
        metric,
        ctx.today,
    )
    .await?;

    if ctx.json {
        print_json(&view)
    } else {
        render_progress(&view);
        Ok(())
    }
}

// ABOUTME: Settings commands showing and updating the program start date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{display_settings, print_json};
use crate::Context;
use gymgo::database_plugins::LogStore;
use gymgo::errors::AppResult;
use gymgo::screens::settings::update_start_date;

/// Show the stored settings
pub async fn show(ctx: &Context) -> AppResult<()> {
    let settings = ctx.database.get_settings().await?;
    if ctx.json {
        return print_json(&settings);
    }
    display_settings(&settings, ctx.today, ctx.config.weeks_total);
    Ok(())
}

/// Validate and store a new start date
pub async fn set_start(ctx: &Context, raw: &str) -> AppResult<()> {
    let settings = update_start_date(&ctx.database, raw).await?;
    if ctx.json {
        return print_json(&settings);
    }
    println!("Saved. Week comparisons now count from this date.");
    display_settings(&settings, ctx.today, ctx.config.weeks_total);
    Ok(())
}

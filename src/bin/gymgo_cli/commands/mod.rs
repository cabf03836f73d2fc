// ABOUTME: Re-exports command modules for the gymgo CLI
// ABOUTME: One module per screen or action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cache;
pub mod log;
pub mod plan;
pub mod progress;
pub mod settings;
pub mod today;

use crate::Context;
use gymgo::content::Content;
use gymgo::errors::AppResult;

/// Load static content with the configured program length override
pub async fn load_content(ctx: &Context) -> AppResult<Content> {
    Ok(Content::load(&ctx.config.content, ctx.config.cache_max_entries)
        .await?
        .with_weeks_total(ctx.config.weeks_total))
}

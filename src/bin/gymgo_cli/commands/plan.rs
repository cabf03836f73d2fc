// ABOUTME: Week plan and technique library commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::load_content;
use crate::helpers::display::{print_json, render_technique_detail, render_techniques, render_week};
use crate::Context;
use gymgo::errors::{AppError, AppResult};
use gymgo::screens::{techniques, week};

/// Render the weekly plan
pub async fn week(ctx: &Context) -> AppResult<()> {
    let content = load_content(ctx).await?;
    let view = week::render(&content);
    if ctx.json {
        return print_json(&view);
    }
    render_week(&view);
    Ok(())
}

/// List techniques, or show the one named by `id`
pub async fn techniques(ctx: &Context, id: Option<&str>) -> AppResult<()> {
    let content = load_content(ctx).await?;
    match id {
        Some(id) => {
            let detail = techniques::detail(&content, id)
                .ok_or_else(|| AppError::not_found(format!("Technique '{id}'")))?;
            if ctx.json {
                return print_json(&detail);
            }
            render_technique_detail(&detail);
        }
        None => {
            let cards = techniques::render(&content);
            if ctx.json {
                return print_json(&cards);
            }
            render_techniques(&cards);
        }
    }
    Ok(())
}

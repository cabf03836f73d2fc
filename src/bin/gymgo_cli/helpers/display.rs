// ABOUTME: Text rendering of screen view models for the gymgo CLI
// ABOUTME: Placeholders render as "—"; JSON output goes through serde_json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gymgo::errors::AppResult;
use gymgo::screens::progress::ProgressView;
use gymgo::screens::techniques::{TechniqueCard, TechniqueDetail};
use gymgo::screens::today::{CardKind, MovementProgress, TodayView};
use gymgo::screens::week::{PlanItem, WeekView};
use gymgo_core::constants::display::EMPTY_PLACEHOLDER;
use gymgo_core::constants::program::DEFAULT_WEEKS_TOTAL;
use gymgo_core::models::{LogEntry, Settings};
use gymgo_intelligence::best_set::describe;
use gymgo_intelligence::trend::{format_metric, format_number};
use gymgo_intelligence::{program_week, DeltaRow};
use serde::Serialize;

/// Print any view model as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_movement(progress: &MovementProgress) {
    let prefix = progress
        .label
        .map(|label| format!("{label}: {} • ", progress.name))
        .unwrap_or_default();
    println!(
        "   {prefix}Last time: {}",
        describe(progress.last_best.as_ref())
    );
    println!("   Goal: {}", progress.suggestion);
    println!(
        "   Sets: {}/{}   [{}]",
        progress.sets_done, progress.sets_total, progress.movement_id
    );
}

/// Render the today screen
pub fn render_today(view: &TodayView) {
    let Some(title) = &view.day_title else {
        println!("No routine. Edit data/routine.json");
        return;
    };
    println!("\nWeek {} • {} • {title}", view.week, view.date);
    println!("{}", "=".repeat(60));
    let others: Vec<&str> = view
        .day_options
        .iter()
        .filter(|option| !option.selected)
        .map(|option| option.id.as_str())
        .collect();
    if !others.is_empty() {
        println!("Other days: {}", others.join(", "));
    }

    for card in &view.cards {
        let technique = card
            .technique
            .as_ref()
            .map_or(EMPTY_PLACEHOLDER, |badge| badge.label.as_str());
        println!("\n{}  [{technique}]", card.name);
        println!(
            "   {} • Tempo {} • Rest {}",
            card.prescription, card.tempo, card.rest
        );
        match &card.body {
            CardKind::Single { progress } => print_movement(progress),
            CardKind::Composite { movements } => {
                for movement in movements {
                    print_movement(movement);
                }
            }
        }
    }
}

/// Render the progress screen
pub fn render_progress(view: &ProgressView) {
    let name = view
        .exercise_name
        .as_deref()
        .or(view.exercise_id.as_deref())
        .unwrap_or(EMPTY_PLACEHOLDER);
    println!("\n{name} • {} (weeks 1–{})", view.metric, view.weeks_total);
    println!("{}", "=".repeat(60));
    println!(
        "This week: {}   Last week: {}",
        format_metric(view.headline.current_value(), view.metric),
        format_metric(view.headline.previous_value(), view.metric)
    );
    let current = view.headline.current.as_ref();
    println!(
        "Best set (this week): {}",
        describe(current.and_then(|row| row.best_set.as_ref()))
    );
    println!(
        "Δ vs last week: {}",
        current
            .and_then(DeltaRow::delta_text)
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_owned())
    );
    if let Some(line) = &view.sparkline {
        println!("Trend: {}", line.blocks);
    }

    println!("\n{:<6} {:<12} {:>12} {:>10}", "Week", "Best set", view.metric.label(), "Δ");
    for row in &view.rows {
        let value = if row.value > 0.0 {
            format_number(row.value, view.metric.decimals())
        } else {
            EMPTY_PLACEHOLDER.to_owned()
        };
        println!(
            "{:<6} {:<12} {:>12} {:>10}",
            row.week,
            describe(row.best_set.as_ref()),
            value,
            row.delta_text().unwrap_or_default()
        );
    }
}

/// Render the weekly plan
pub fn render_week(view: &WeekView) {
    println!("\nWeekly plan ({} weeks)", view.weeks_total);
    for day in &view.days {
        println!("\n{} • {}", day.week_day_name, day.title);
        for item in &day.items {
            match item {
                PlanItem::Single(part) => println!("  • {} ({})", part.name, part.prescription),
                PlanItem::Composite { name, parts } => {
                    println!("  • {name} (superset)");
                    for part in parts {
                        println!("      ↳ {} ({})", part.name, part.prescription);
                    }
                }
            }
        }
    }
}

/// Render the technique list
pub fn render_techniques(cards: &[TechniqueCard]) {
    for card in cards {
        println!("{} {} [{}]", card.emoji, card.label, card.id);
        println!("   {}", card.summary);
    }
}

/// Render one technique
pub fn render_technique_detail(detail: &TechniqueDetail) {
    println!("\n{}", detail.title);
    println!("{}\n", detail.summary);
    for step in &detail.howto {
        println!("• {step}");
    }
    println!("\nExample: {}", detail.example);
}

/// Confirm a stored entry
pub fn display_saved_entry(entry: &LogEntry, planned_sets: u32) {
    println!(
        "Saved {} for {} (week {}): {}/{} sets done",
        entry.exercise_id,
        entry.date,
        entry.week,
        entry.sets_done(),
        planned_sets
    );
}

/// Show the start date and the program week it implies for `today`
pub fn display_settings(settings: &Settings, today: NaiveDate, weeks_total: Option<u32>) {
    let weeks_total = weeks_total.unwrap_or(DEFAULT_WEEKS_TOTAL);
    let start = settings
        .program_start_date
        .map_or_else(|| EMPTY_PLACEHOLDER.to_owned(), |date| date.to_string());
    println!("Program start: {start}");
    println!(
        "Today ({today}) is week {} of {weeks_total}",
        program_week(settings.program_start_date, today, weeks_total)
    );
}

// ABOUTME: Progress screen comparing an exercise's program weeks
// ABOUTME: Weekly rows with deltas, a this-week vs last-week headline, and a sparkline

use crate::content::Content;
use crate::database_plugins::LogStore;
use crate::errors::AppResult;
use chrono::NaiveDate;
use gymgo_core::models::{Routine, Settings};
use gymgo_intelligence::{
    aggregate_by_week, headline, program_week, sparkline, week_over_week_delta, CompositeExt,
    DeltaRow, Headline, Metric, Sparkline,
};
use serde::Serialize;
use tracing::debug;

/// Trackable exercise offered by the selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseOption {
    /// Exercise id or virtual movement id
    pub id: String,
    /// Display name; movements read `Parent • Movement`
    pub name: String,
    /// Parent exercise of a virtual movement
    pub parent_id: Option<String>,
}

/// Rendered progress screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    /// Exercise being compared
    pub exercise_id: Option<String>,
    /// Its display name, when the routine knows it
    pub exercise_name: Option<String>,
    /// Compared metric
    pub metric: Metric,
    /// Program week of `as_of`
    pub program_week: u32,
    /// Program length
    pub weeks_total: u32,
    /// Selector options
    pub options: Vec<ExerciseOption>,
    /// One row per program week
    pub rows: Vec<DeltaRow>,
    /// This week vs last week
    pub headline: Headline,
    /// Trend line, absent with fewer than two data points
    pub sparkline: Option<Sparkline>,
}

/// Every trackable exercise, first occurrence wins; composites expand to their movements
#[must_use]
pub fn exercise_options(routine: &Routine) -> Vec<ExerciseOption> {
    routine
        .unique_exercises()
        .into_iter()
        .flat_map(|exercise| match exercise.movements() {
            Some(movements) => movements
                .into_iter()
                .map(|movement| ExerciseOption {
                    id: movement.id,
                    name: format!("{} • {}", exercise.name, movement.name),
                    parent_id: Some(exercise.id.clone()),
                })
                .collect(),
            None => vec![ExerciseOption {
                id: exercise.id.clone(),
                name: exercise.name.clone(),
                parent_id: None,
            }],
        })
        .collect()
}

/// Render the comparison for `exercise_id` (first option when `None`)
///
/// An id the routine does not know still renders whatever was logged under it.
///
/// # Errors
///
/// Returns an error if the log store fails
pub async fn render<S>(
    store: &S,
    content: &Content,
    settings: &Settings,
    exercise_id: Option<&str>,
    metric: Metric,
    as_of: NaiveDate,
) -> AppResult<ProgressView>
where
    S: LogStore + ?Sized,
{
    let weeks_total = content.weeks_total();
    let current_week = program_week(settings.program_start_date, as_of, weeks_total);
    let options = exercise_options(&content.routine);

    let selected = exercise_id
        .map(str::to_owned)
        .or_else(|| options.first().map(|option| option.id.clone()));
    let exercise_name = selected.as_deref().and_then(|id| {
        options
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.name.clone())
    });

    let logs = match selected.as_deref() {
        Some(id) => store.list_logs_by_exercise(id).await?,
        None => Vec::new(),
    };
    debug!(exercise = ?selected, entries = logs.len(), %metric, "Rendering progress");

    let weeks = aggregate_by_week(&logs, weeks_total);
    let rows = week_over_week_delta(&weeks, metric);
    let values: Vec<f64> = rows.iter().map(|row| row.value).collect();

    Ok(ProgressView {
        exercise_id: selected,
        exercise_name,
        metric,
        program_week: current_week,
        weeks_total,
        options,
        headline: headline(&rows, current_week),
        sparkline: sparkline(&values),
        rows,
    })
}

// ABOUTME: Today screen: per-exercise last best set, next target, and sets done for a date
// ABOUTME: Composite exercises render one progress block per virtual movement

use super::ViewState;
use crate::content::Content;
use crate::database_plugins::LogStore;
use crate::errors::AppResult;
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use gymgo_core::models::{Exercise, MovementLabel, Routine, Settings};
use gymgo_intelligence::best_set::{best_set_from_log, most_recent_excluding, BestSet};
use gymgo_intelligence::schedule::{next_day_in_schedule, resolve_day, rest_text};
use gymgo_intelligence::{program_week, suggest_next_target, CompositeExt, Suggestion};
use serde::Serialize;
use tracing::debug;

/// Routine day choice offered by the day selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOption {
    /// Day id
    pub id: String,
    /// Day title
    pub title: String,
    /// Whether this is the day being shown
    pub selected: bool,
}

/// Technique badge shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueBadge {
    /// Technique id
    pub id: String,
    /// Technique label
    pub label: String,
}

/// Progress of one tracked movement on the shown date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovementProgress {
    /// Exercise id or virtual movement id
    pub movement_id: String,
    /// Movement name
    pub name: String,
    /// `A` / `B` for composite halves
    pub label: Option<MovementLabel>,
    /// Best set of the most recent session on another date
    pub last_best: Option<BestSet>,
    /// Next-session target
    pub suggestion: Suggestion,
    /// Complete sets logged on the shown date
    pub sets_done: usize,
    /// Planned sets
    pub sets_total: u32,
}

/// Card body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    /// Regular exercise
    Single {
        /// Progress of the exercise itself
        progress: MovementProgress,
    },
    /// Giant set or superset tracked per movement
    Composite {
        /// Progress of movements A and B
        movements: [MovementProgress; 2],
    },
}

/// One exercise of the shown day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseCard {
    /// Routine exercise id
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// `3×8–12`
    pub prescription: String,
    /// Tempo notation
    pub tempo: String,
    /// `90s` or `60–90s`
    pub rest: String,
    /// Linked technique, when it exists in the library
    pub technique: Option<TechniqueBadge>,
    /// Progress blocks
    pub body: CardKind,
}

/// Rendered today screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayView {
    /// Date being logged
    pub date: NaiveDate,
    /// Program week of that date
    pub week: u32,
    /// Id of the shown day, `None` when the routine has no days
    pub day_id: Option<String>,
    /// Title of the shown day
    pub day_title: Option<String>,
    /// Day selector options
    pub day_options: Vec<DayOption>,
    /// One card per exercise of the day
    pub cards: Vec<ExerciseCard>,
}

/// Render the screen for `state`
///
/// A missing `day_id` (or one no longer in the routine) falls back to the
/// scheduled day for the date, then to the first routine day.
///
/// # Errors
///
/// Returns an error if the log store fails
pub async fn render<S>(
    store: &S,
    content: &Content,
    settings: &Settings,
    state: ViewState,
) -> AppResult<(TodayView, ViewState)>
where
    S: LogStore + ?Sized,
{
    let routine = &content.routine;
    let state = if state.day_id.is_none() {
        ViewState::for_date(routine, state.date)
    } else {
        state
    };
    let week = program_week(
        settings.program_start_date,
        state.date,
        content.weeks_total(),
    );

    let Some(day) = resolve_day(routine, state.day_id.as_deref()) else {
        debug!("Routine has no days");
        let view = TodayView {
            date: state.date,
            week,
            day_id: None,
            day_title: None,
            day_options: Vec::new(),
            cards: Vec::new(),
        };
        return Ok((view, state));
    };

    let cards = try_join_all(
        day.exercises
            .iter()
            .map(|exercise| build_card(store, content, state.date, exercise)),
    )
    .await?;

    let view = TodayView {
        date: state.date,
        week,
        day_id: Some(day.id.clone()),
        day_title: Some(day.title.clone()),
        day_options: day_options(routine, &day.id),
        cards,
    };
    let state = ViewState::new(state.date, Some(day.id.clone()));
    Ok((view, state))
}

fn day_options(routine: &Routine, selected: &str) -> Vec<DayOption> {
    routine
        .days
        .iter()
        .map(|day| DayOption {
            id: day.id.clone(),
            title: day.title.clone(),
            selected: day.id == selected,
        })
        .collect()
}

async fn build_card<S>(
    store: &S,
    content: &Content,
    date: NaiveDate,
    exercise: &Exercise,
) -> AppResult<ExerciseCard>
where
    S: LogStore + ?Sized,
{
    let body = match exercise.movements() {
        Some([a, b]) => {
            let (a, b) = tokio::try_join!(
                movement_progress(store, date, exercise, &a.id, &a.name, Some(a.label)),
                movement_progress(store, date, exercise, &b.id, &b.name, Some(b.label)),
            )?;
            CardKind::Composite { movements: [a, b] }
        }
        None => CardKind::Single {
            progress: movement_progress(
                store,
                date,
                exercise,
                &exercise.id,
                &exercise.name,
                None,
            )
            .await?,
        },
    };

    Ok(ExerciseCard {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        prescription: exercise.prescription(),
        tempo: exercise.tempo.clone(),
        rest: rest_text(exercise),
        technique: content
            .technique_for(exercise)
            .map(|technique| TechniqueBadge {
                id: technique.id.clone(),
                label: technique.label.clone(),
            }),
        body,
    })
}

async fn movement_progress<S>(
    store: &S,
    date: NaiveDate,
    exercise: &Exercise,
    movement_id: &str,
    name: &str,
    label: Option<MovementLabel>,
) -> AppResult<MovementProgress>
where
    S: LogStore + ?Sized,
{
    let (today, history) = tokio::try_join!(
        store.get_log(date, movement_id),
        store.list_logs_by_exercise(movement_id),
    )?;
    let last_best = best_set_from_log(most_recent_excluding(&history, date));
    let suggestion = suggest_next_target(exercise.rep_range, last_best.as_ref());

    Ok(MovementProgress {
        movement_id: movement_id.to_owned(),
        name: name.to_owned(),
        label,
        last_best,
        suggestion,
        sets_done: today.as_ref().map_or(0, |entry| entry.sets_done()),
        sets_total: exercise.sets,
    })
}

/// Jump to `today` and its scheduled day
#[must_use]
pub fn go_today(routine: &Routine, today: NaiveDate) -> ViewState {
    ViewState::for_date(routine, today)
}

/// Show another date; the day follows that date's schedule
#[must_use]
pub fn change_date(routine: &Routine, date: NaiveDate) -> ViewState {
    ViewState::for_date(routine, date)
}

/// Show another routine day on the same date
#[must_use]
pub fn change_day(state: &ViewState, day_id: &str) -> ViewState {
    ViewState::new(state.date, Some(day_id.to_owned()))
}

/// Advance to the next scheduled workout on the same date
#[must_use]
pub fn next_workout(routine: &Routine, state: &ViewState) -> ViewState {
    ViewState::new(
        state.date,
        next_day_in_schedule(routine, state.day_id.as_deref()).map(str::to_owned),
    )
}

// ABOUTME: Weekly plan screen listing each scheduled day's exercises
// ABOUTME: Composite exercises expand into their movements

use crate::content::Content;
use gymgo_core::models::Exercise;
use gymgo_intelligence::schedule::weekday_name;
use gymgo_intelligence::CompositeExt;
use serde::Serialize;

/// One planned movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanPart {
    /// Movement name
    pub name: String,
    /// `3×8–12`
    pub prescription: String,
}

/// One line of a day's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanItem {
    /// Regular exercise
    Single(PlanPart),
    /// Superset with its movements
    Composite {
        /// Exercise name
        name: String,
        /// Movements A and B
        parts: Vec<PlanPart>,
    },
}

/// One scheduled training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDay {
    /// ISO weekday, Monday = 1
    pub week_day: u8,
    /// Short weekday name
    pub week_day_name: String,
    /// Routine day id
    pub day_id: String,
    /// Routine day title
    pub title: String,
    /// Exercises in routine order
    pub items: Vec<PlanItem>,
}

/// Rendered week plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekView {
    /// Program length
    pub weeks_total: u32,
    /// Scheduled days in schedule order
    pub days: Vec<PlannedDay>,
}

/// Render the plan; schedule slots naming an unknown day are skipped
#[must_use]
pub fn render(content: &Content) -> WeekView {
    let routine = &content.routine;
    let days = routine
        .schedule
        .iter()
        .filter_map(|slot| {
            let day = routine.find_day(&slot.day_id)?;
            Some(PlannedDay {
                week_day: slot.week_day,
                week_day_name: weekday_name(slot.week_day),
                day_id: day.id.clone(),
                title: day.title.clone(),
                items: day.exercises.iter().map(plan_item).collect(),
            })
        })
        .collect();

    WeekView {
        weeks_total: content.weeks_total(),
        days,
    }
}

fn plan_item(exercise: &Exercise) -> PlanItem {
    let prescription = exercise.prescription();
    match exercise.movements() {
        Some(movements) => PlanItem::Composite {
            name: exercise.name.clone(),
            parts: movements
                .into_iter()
                .map(|movement| PlanPart {
                    name: movement.name,
                    prescription: prescription.clone(),
                })
                .collect(),
        },
        None => PlanItem::Single(PlanPart {
            name: exercise.name.clone(),
            prescription,
        }),
    }
}

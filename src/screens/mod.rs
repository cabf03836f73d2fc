// ABOUTME: Screen view models rendered from the log store and static content
// ABOUTME: Navigation state is an explicit value passed into and returned from each render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Screens
//!
//! Each screen is a pure-ish function of `(store, content, settings, state)`
//! returning a serializable view model. Nothing here holds mutable state
//! between calls; the caller keeps the returned [`ViewState`].

/// Progress comparison screen
pub mod progress;
/// Program start date validation and bootstrap
pub mod settings;
/// Technique library
pub mod techniques;
/// Daily logging screen
pub mod today;
/// Weekly plan
pub mod week;

use chrono::NaiveDate;
use gymgo_core::models::Routine;
use gymgo_intelligence::schedule::pick_day_for_date;
use serde::{Deserialize, Serialize};

/// Date and routine day the today screen is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Date being logged
    pub date: NaiveDate,
    /// Selected routine day; resolved from the schedule when absent
    pub day_id: Option<String>,
}

impl ViewState {
    /// State for `date` with the day planned for its weekday
    #[must_use]
    pub fn for_date(routine: &Routine, date: NaiveDate) -> Self {
        Self {
            date,
            day_id: pick_day_for_date(routine, date).map(str::to_owned),
        }
    }

    /// State for `date` and an explicit day
    #[must_use]
    pub fn new(date: NaiveDate, day_id: Option<String>) -> Self {
        Self { date, day_id }
    }
}

// ABOUTME: Double-progression advisor proposing the next session's target
// ABOUTME: Add reps at the same load until the rep ceiling, then add ~2.5% load and reset reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::best_set::{format_weight, BestSet};
use gymgo_core::constants::program::{
    REPS_DROP_AFTER_WEIGHT_INCREASE, TARGET_RIR_HIGH, TARGET_RIR_LOW, WEIGHT_INCREASE_FACTOR,
    WEIGHT_ROUNDING_STEP_KG,
};
use gymgo_core::models::RepRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Precision the scaled value is snapped to before rounding
///
/// `50 * 1.025` evaluates to `51.249999…` in binary floating point; snapping
/// first makes exact halves round up as written on paper.
const ROUNDING_SNAP: f64 = 1e9;

/// Next-session target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// No history: work anywhere inside the range, 1–2 reps in reserve
    WorkInRange {
        /// Target range
        range: RepRange,
    },
    /// Same load, at least one more rep
    AddReps {
        /// Load to keep
        weight: f64,
        /// Minimum reps to hit
        reps: u32,
    },
    /// Rep ceiling reached: heavier load, back near the bottom of the range
    AddWeight {
        /// New load rounded to the plate step
        weight: f64,
        /// Lower rep target
        reps_low: u32,
        /// Upper rep target
        reps_high: u32,
    },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WorkInRange { range } => write!(
                f,
                "Aim for {range} reps (RIR {TARGET_RIR_LOW}–{TARGET_RIR_HIGH})"
            ),
            Self::AddReps { weight, reps } => {
                write!(f, "{} × {reps} (or more)", format_weight(weight))
            }
            Self::AddWeight {
                weight,
                reps_low,
                reps_high,
            } => write!(f, "{} × {reps_low}–{reps_high}", format_weight(weight)),
        }
    }
}

/// Round half up to the nearest multiple of `step`
#[must_use]
pub fn round_half_up_to_step(value: f64, step: f64) -> f64 {
    if !value.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let scaled = (value / step * ROUNDING_SNAP).round() / ROUNDING_SNAP;
    (scaled + 0.5).floor() * step
}

/// Double progression: reps first, then weight
///
/// - no previous best set: work within the range
/// - `reps < max`: same weight, `reps + 1` capped at `max`
/// - `reps >= max`: `weight × 1.025` rounded to 0.5 kg, `max(min, max - 2)..=max` reps
#[must_use]
pub fn suggest_next_target(range: RepRange, last_best: Option<&BestSet>) -> Suggestion {
    let Some(best) = last_best else {
        return Suggestion::WorkInRange { range };
    };

    let weight = best.weight();
    let reps = best.reps();
    if reps < range.max {
        return Suggestion::AddReps {
            weight,
            reps: (reps + 1).min(range.max),
        };
    }

    Suggestion::AddWeight {
        weight: round_half_up_to_step(
            weight * WEIGHT_INCREASE_FACTOR,
            WEIGHT_ROUNDING_STEP_KG,
        ),
        reps_low: range
            .max
            .saturating_sub(REPS_DROP_AFTER_WEIGHT_INCREASE)
            .max(range.min),
        reps_high: range.max,
    }
}

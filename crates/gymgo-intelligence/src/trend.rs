// ABOUTME: Week-over-week trend comparison for a chosen metric
// ABOUTME: Percentage deltas, the current-vs-previous headline, and sparkline rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::best_set::BestSet;
use crate::weekly::WeekRow;
use gymgo_core::constants::display::{EMPTY_PLACEHOLDER, TREND_DOWN, TREND_UP};
use gymgo_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Width of the sparkline `viewBox`
const SPARKLINE_WIDTH: f64 = 240.0;
/// Height of the sparkline `viewBox`
const SPARKLINE_HEIGHT: f64 = 44.0;
/// Inner padding of the sparkline
const SPARKLINE_PADDING: f64 = 6.0;
/// Smallest span used to normalise values, avoids dividing by zero
const MIN_SPAN: f64 = 1e-6;
/// Unicode ramp for terminal sparklines, lowest to highest
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Metric compared across weeks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Estimated one-rep max of the week's best set
    #[default]
    E1rm,
    /// Total weekly volume (kg)
    Volume,
}

impl Metric {
    /// Value of this metric for one week
    #[must_use]
    pub const fn value_of(self, row: &WeekRow) -> f64 {
        match self {
            Self::E1rm => row.e1rm,
            Self::Volume => row.volume,
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::E1rm => "e1RM",
            Self::Volume => "Weekly volume",
        }
    }

    /// Decimals used when displaying values
    #[must_use]
    pub const fn decimals(self) -> usize {
        match self {
            Self::E1rm => 1,
            Self::Volume => 0,
        }
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e1rm" => Ok(Self::E1rm),
            "vol" | "volume" => Ok(Self::Volume),
            other => Err(AppError::invalid_format(format!(
                "unknown metric '{other}', expected e1rm or volume"
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a week-over-week change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Zero or positive change
    Up,
    /// Negative change
    Down,
}

impl TrendDirection {
    /// Arrow marker
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Up => TREND_UP,
            Self::Down => TREND_DOWN,
        }
    }
}

/// Percentage change from `previous` to `current`; undefined unless both are positive
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous <= 0.0 || current <= 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// One week of a metric with its change against the week before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRow {
    /// Program week
    pub week: u32,
    /// Metric value
    pub value: f64,
    /// Percent change vs the previous week
    pub delta_percent: Option<f64>,
    /// Best set of the week, carried for display
    pub best_set: Option<BestSet>,
}

impl DeltaRow {
    /// Direction of the change, if defined
    #[must_use]
    pub fn direction(&self) -> Option<TrendDirection> {
        self.delta_percent.map(|delta| {
            if delta >= 0.0 {
                TrendDirection::Up
            } else {
                TrendDirection::Down
            }
        })
    }

    /// `▲ 4.2%` / `▼ 1.0%`, or `None` when the delta is undefined
    #[must_use]
    pub fn delta_text(&self) -> Option<String> {
        let delta = self.delta_percent?;
        let direction = self.direction()?;
        Some(format!(
            "{} {}%",
            direction.marker(),
            format_number(delta.abs(), 1)
        ))
    }
}

/// Pair every week with its change against the preceding week
#[must_use]
pub fn week_over_week_delta(rows: &[WeekRow], metric: Metric) -> Vec<DeltaRow> {
    let mut previous: Option<f64> = None;
    rows.iter()
        .map(|row| {
            let value = metric.value_of(row);
            let delta_percent = previous.and_then(|prev| percent_change(prev, value));
            previous = Some(value);
            DeltaRow {
                week: row.week,
                value,
                delta_percent,
                best_set: row.best_set.clone(),
            }
        })
        .collect()
}

/// "This week" versus "last week"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Row of the current program week
    pub current: Option<DeltaRow>,
    /// Row of the week before, or week 1 during week 1
    pub previous: Option<DeltaRow>,
}

impl Headline {
    /// Current metric value when positive
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        positive(self.current.as_ref())
    }

    /// Previous metric value when positive
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        positive(self.previous.as_ref())
    }
}

fn positive(row: Option<&DeltaRow>) -> Option<f64> {
    row.map(|row| row.value).filter(|value| *value > 0.0)
}

/// Select the current and previous rows for `program_week`
///
/// The current row falls back to the first row when the week is out of range.
#[must_use]
pub fn headline(rows: &[DeltaRow], program_week: u32) -> Headline {
    let index = program_week.saturating_sub(1) as usize;
    let current = rows.get(index).or_else(|| rows.first()).cloned();
    let previous = rows.get(index.saturating_sub(1)).cloned();
    Headline { current, previous }
}

/// Rendered trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sparkline {
    /// Polyline points, `x,y` pairs with one decimal
    pub points: String,
    /// Standalone SVG document
    pub svg: String,
    /// One block character per value for terminals
    pub blocks: String,
}

/// Render a sparkline; `None` when fewer than two values are positive
///
/// Non-positive values are drawn on the baseline.
#[must_use]
pub fn sparkline(values: &[f64]) -> Option<Sparkline> {
    let positives: Vec<f64> = values
        .iter()
        .copied()
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect();
    if positives.len() < 2 {
        return None;
    }
    let min = positives.iter().copied().fold(f64::INFINITY, f64::min);
    let max = positives.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(MIN_SPAN);

    let step = (SPARKLINE_WIDTH - SPARKLINE_PADDING * 2.0) / (values.len() - 1) as f64;
    let mut points = String::new();
    let mut blocks = String::new();
    for (i, value) in values.iter().copied().enumerate() {
        let x = SPARKLINE_PADDING + step * i as f64;
        let is_point = value.is_finite() && value > 0.0;
        let ratio = if is_point { (value - min) / span } else { 0.0 };
        let y = if is_point {
            SPARKLINE_PADDING + (SPARKLINE_HEIGHT - SPARKLINE_PADDING * 2.0) * (1.0 - ratio)
        } else {
            SPARKLINE_HEIGHT - SPARKLINE_PADDING
        };
        if !points.is_empty() {
            points.push(' ');
        }
        let _ = write!(points, "{x:.1},{y:.1}");

        blocks.push(if is_point {
            let level = (ratio * (BLOCKS.len() - 1) as f64).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        } else {
            ' '
        });
    }

    let svg = format!(
        r#"<svg viewBox="0 0 {SPARKLINE_WIDTH} {SPARKLINE_HEIGHT}" width="100%" height="{SPARKLINE_HEIGHT}" aria-hidden="true"><polyline fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" points="{points}"/></svg>"#
    );
    Some(Sparkline {
        points,
        svg,
        blocks,
    })
}

/// Format with a fixed number of decimals and thousands separators
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = text
        .split_once('.')
        .map_or((text.as_str(), None), |(int, frac)| (int, Some(frac)));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    let is_zero = grouped.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Metric value with unit, or the placeholder when missing
#[must_use]
pub fn format_metric(value: Option<f64>, metric: Metric) -> String {
    value.map_or_else(
        || EMPTY_PLACEHOLDER.to_owned(),
        |value| format!("{} kg", format_number(value, metric.decimals())),
    )
}

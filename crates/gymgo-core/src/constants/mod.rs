// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Program defaults, progression tuning values, and display placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Offline shell cache naming and fallback bodies
pub mod cache;

/// Training program defaults
pub mod program {
    /// Length of a training block when the routine does not say otherwise
    pub const DEFAULT_WEEKS_TOTAL: u32 = 8;

    /// Days in a program week
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Divisor of the Epley estimate: `weight * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;

    /// Load multiplier applied once the top of the rep range is reached (~2.5%)
    pub const WEIGHT_INCREASE_FACTOR: f64 = 1.025;

    /// Smallest plate increment suggestions are rounded to (kg)
    pub const WEIGHT_ROUNDING_STEP_KG: f64 = 0.5;

    /// Reps dropped below the ceiling after a weight increase
    pub const REPS_DROP_AFTER_WEIGHT_INCREASE: u32 = 2;

    /// Reps-in-reserve band suggested when there is no history
    pub const TARGET_RIR_LOW: u32 = 1;

    /// Upper bound of the suggested reps-in-reserve band
    pub const TARGET_RIR_HIGH: u32 = 2;
}

/// Storage keys and identifiers
pub mod storage {
    /// Primary key of the settings singleton row
    pub const SETTINGS_SINGLETON_ID: &str = "singleton";

    /// Separator between date and exercise id in a log key
    pub const LOG_KEY_SEPARATOR: char = '|';

    /// Suffix separator for virtual sub-movement ids (`<id>__A`)
    pub const VIRTUAL_ID_SEPARATOR: &str = "__";
}

/// Display strings
pub mod display {
    /// Placeholder rendered for missing values
    pub const EMPTY_PLACEHOLDER: &str = "—";

    /// Marker for a rising trend
    pub const TREND_UP: &str = "▲";

    /// Marker for a falling trend
    pub const TREND_DOWN: &str = "▼";
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the logging subscriber
    pub const GYMGO: &str = "gymgo";
}

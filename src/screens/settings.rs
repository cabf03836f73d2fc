// ABOUTME: Program start date validation and first-run bootstrap
// ABOUTME: Malformed dates are rejected with InvalidFormat before reaching the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::LogStore;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use gymgo_core::models::{Settings, SettingsPatch};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

/// `YYYY-MM-DD`
static DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Parse a user-typed start date
///
/// # Errors
///
/// Returns `InvalidFormat` unless the trimmed input is a real `YYYY-MM-DD` date
pub fn parse_start_date(raw: &str) -> AppResult<NaiveDate> {
    let value = raw.trim();
    let shaped = DATE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if !shaped {
        return Err(AppError::invalid_format(format!(
            "Use YYYY-MM-DD (e.g. 2026-01-09), got '{value}'"
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::invalid_format(format!("'{value}' is not a calendar date: {e}")))
}

/// Validate and store a new program start date
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed input, or a store error
pub async fn update_start_date<S>(store: &S, raw: &str) -> AppResult<Settings>
where
    S: LogStore + ?Sized,
{
    let start = parse_start_date(raw)?;
    let settings = store
        .set_settings(&SettingsPatch {
            program_start_date: Some(start),
        })
        .await?;
    info!(%start, "Program start date updated");
    Ok(settings)
}

/// Set the start date to `today` when none is stored yet
///
/// # Errors
///
/// Returns an error if the store fails
pub async fn ensure_start_date<S>(store: &S, today: NaiveDate) -> AppResult<Settings>
where
    S: LogStore + ?Sized,
{
    let settings = store.get_settings().await?;
    if settings.program_start_date.is_some() {
        return Ok(settings);
    }
    info!(%today, "No program start date; starting today");
    store
        .set_settings(&SettingsPatch {
            program_start_date: Some(today),
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date(" 2026-01-09 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 9).unwrap()
        );
        for bad in ["2026-1-9", "09/01/2026", "", "2026-01-09T00:00", "2026-02-30"] {
            let error = parse_start_date(bad).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidFormat, "{bad}");
        }
    }
}

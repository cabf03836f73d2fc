// ABOUTME: Settings singleton holding the program start date
// ABOUTME: Patches merge into the stored record; absent start date means week 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage::SETTINGS_SINGLETON_ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Singleton settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Always `"singleton"`
    pub id: String,
    /// First day of week 1
    pub program_start_date: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: SETTINGS_SINGLETON_ID.to_owned(),
            program_start_date: None,
        }
    }
}

impl Settings {
    /// Apply a patch, keeping fields the patch leaves unset
    #[must_use]
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(start) = patch.program_start_date {
            self.program_start_date = Some(start);
        }
        self
    }
}

/// Partial update of the settings singleton
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// New program start date
    #[serde(default)]
    pub program_start_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unset_fields() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        let settings = Settings::default().merged(&SettingsPatch {
            program_start_date: Some(start),
        });
        assert_eq!(settings.program_start_date, Some(start));

        let unchanged = settings.clone().merged(&SettingsPatch::default());
        assert_eq!(unchanged, settings);
    }

    #[test]
    fn test_wire_format() {
        let settings: Settings =
            serde_json::from_str(r#"{"id":"singleton","programStartDate":"2026-01-09"}"#).unwrap();
        assert_eq!(
            settings.program_start_date,
            NaiveDate::from_ymd_opt(2026, 1, 9)
        );
    }
}

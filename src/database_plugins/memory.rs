// ABOUTME: In-memory log store for tests and ephemeral sessions
// ABOUTME: Entries live in a RwLock-guarded map keyed by "<date>|<exerciseId>"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LogStore;
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use gymgo_core::models::{log_key, LogEntry, Settings, SettingsPatch};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory log store
///
/// Clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct MemoryStore {
    settings: Arc<RwLock<Option<Settings>>>,
    logs: Arc<RwLock<HashMap<String, LogEntry>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.logs.read().await.len()
    }

    /// Whether no entries are stored
    pub async fn is_empty(&self) -> bool {
        self.logs.read().await.is_empty()
    }

    async fn filter_logs<F>(&self, predicate: F) -> Vec<LogEntry>
    where
        F: Fn(&LogEntry) -> bool + Send,
    {
        self.logs
            .read()
            .await
            .values()
            .filter(|entry| predicate(entry))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn init(&self) -> AppResult<()> {
        let mut settings = self.settings.write().await;
        if settings.is_none() {
            *settings = Some(Settings::default());
        }
        drop(settings);
        Ok(())
    }

    async fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.settings.read().await.clone().unwrap_or_default())
    }

    async fn set_settings(&self, patch: &SettingsPatch) -> AppResult<Settings> {
        let mut settings = self.settings.write().await;
        let next = settings.clone().unwrap_or_default().merged(patch);
        *settings = Some(next.clone());
        drop(settings);
        Ok(next)
    }

    async fn get_log(&self, date: NaiveDate, exercise_id: &str) -> AppResult<Option<LogEntry>> {
        Ok(self
            .logs
            .read()
            .await
            .get(&log_key(date, exercise_id))
            .cloned())
    }

    async fn save_log(&self, entry: &LogEntry) -> AppResult<LogEntry> {
        self.logs.write().await.insert(entry.key(), entry.clone());
        Ok(entry.clone())
    }

    async fn list_logs_by_exercise(&self, exercise_id: &str) -> AppResult<Vec<LogEntry>> {
        Ok(self
            .filter_logs(|entry| entry.exercise_id == exercise_id)
            .await)
    }
}

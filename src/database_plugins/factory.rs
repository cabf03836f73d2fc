// ABOUTME: Database factory selecting a log store backend from the configured URL
// ABOUTME: Delegates every LogStore call to the SQLite or in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database factory for creating log store backends

use super::memory::MemoryStore;
use super::sqlite::SqliteStore;
use super::LogStore;
use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use gymgo_core::models::{LogEntry, Settings, SettingsPatch};
use tracing::{debug, info};

/// Supported backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// `SQLite`, file-backed or in-memory
    SQLite,
    /// Process-local hash map
    Memory,
}

/// Log store wrapper that delegates to the selected backend
#[derive(Clone)]
pub enum Database {
    /// `SQLite` backend
    SQLite(SqliteStore),
    /// In-memory backend
    Memory(MemoryStore),
}

impl Database {
    /// Open the backend named by `url` and ensure the settings singleton exists
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be opened or initialized
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        debug!("Selecting log store for {}", url);
        let database = match url.to_connection_string() {
            Some(connection) => {
                info!("Initializing SQLite log store");
                Self::SQLite(SqliteStore::new(&connection).await?)
            }
            None => {
                info!("Initializing in-memory log store");
                Self::Memory(MemoryStore::new())
            }
        };
        database.init().await?;
        info!("{} initialized", database.backend_info());
        Ok(database)
    }

    /// Open the backend named by a raw connection string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a supported URL or opening fails
    pub async fn from_url(raw: &str) -> AppResult<Self> {
        Self::new(&DatabaseUrl::parse_url(raw)?).await
    }

    /// Descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Local Persistence)",
            Self::Memory(_) => "In-Memory (Ephemeral)",
        }
    }

    /// Backend type
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
            Self::Memory(_) => DatabaseType::Memory,
        }
    }

    /// Detailed backend information for logging
    #[must_use]
    pub fn info_summary(&self) -> String {
        match self {
            Self::SQLite(_) => "Database Backend: SQLite\n\
                     Type: Embedded file-based database\n\
                     Durability: Entries survive restarts"
                .to_owned(),
            Self::Memory(_) => "Database Backend: In-Memory\n\
                     Type: Process-local map\n\
                     Durability: Entries are lost on exit"
                .to_owned(),
        }
    }
}

/// Detect the backend type from a raw connection string
///
/// # Errors
///
/// Returns an error if the string names an unsupported scheme
pub fn detect_database_type(raw: &str) -> AppResult<DatabaseType> {
    match DatabaseUrl::parse_url(raw)? {
        DatabaseUrl::SQLite { .. } | DatabaseUrl::SqliteMemory => Ok(DatabaseType::SQLite),
        DatabaseUrl::Memory => Ok(DatabaseType::Memory),
    }
}

#[async_trait]
impl LogStore for Database {
    async fn init(&self) -> AppResult<()> {
        match self {
            Self::SQLite(db) => db.init().await,
            Self::Memory(db) => db.init().await,
        }
    }

    async fn get_settings(&self) -> AppResult<Settings> {
        match self {
            Self::SQLite(db) => db.get_settings().await,
            Self::Memory(db) => db.get_settings().await,
        }
    }

    async fn set_settings(&self, patch: &SettingsPatch) -> AppResult<Settings> {
        match self {
            Self::SQLite(db) => db.set_settings(patch).await,
            Self::Memory(db) => db.set_settings(patch).await,
        }
    }

    async fn get_log(&self, date: NaiveDate, exercise_id: &str) -> AppResult<Option<LogEntry>> {
        match self {
            Self::SQLite(db) => db.get_log(date, exercise_id).await,
            Self::Memory(db) => db.get_log(date, exercise_id).await,
        }
    }

    async fn save_log(&self, entry: &LogEntry) -> AppResult<LogEntry> {
        if entry.exercise_id.is_empty() {
            return Err(AppError::invalid_input("Log entry has no exercise id"));
        }
        match self {
            Self::SQLite(db) => db.save_log(entry).await,
            Self::Memory(db) => db.save_log(entry).await,
        }
    }

    async fn list_logs_by_exercise(&self, exercise_id: &str) -> AppResult<Vec<LogEntry>> {
        match self {
            Self::SQLite(db) => db.list_logs_by_exercise(exercise_id).await,
            Self::Memory(db) => db.list_logs_by_exercise(exercise_id).await,
        }
    }
}

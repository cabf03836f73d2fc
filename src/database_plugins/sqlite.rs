// ABOUTME: SQLite log store implementation using sqlx
// ABOUTME: Settings singleton table and a logs table keyed by "<date>|<exerciseId>"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` backend
//!
//! Sets are stored as a JSON array in the `sets` column, exactly as the
//! entry carries them; incomplete sets are kept.

use super::LogStore;
use crate::constants::storage::SETTINGS_SINGLETON_ID;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use gymgo_core::models::{log_key, LogEntry, Set, Settings, SettingsPatch};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Date format of the `date` and `program_start_date` columns
const DATE_FORMAT: &str = "%Y-%m-%d";

/// `SQLite` log store
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if missing) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the file cannot be created,
    /// or a migration statement fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");
        if !is_memory {
            ensure_parent_dir(database_url).await?;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid SQLite URL {database_url}: {e}")))?
            .create_if_missing(true);

        let pool = pool_options(is_memory)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open {database_url}: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database_url, "SQLite log store ready");
        Ok(store)
    }

    /// Create tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS settings (
                id TEXT PRIMARY KEY,
                program_start_date TEXT,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create settings table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS logs (
                key TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                week INTEGER NOT NULL,
                day_id TEXT NOT NULL,
                exercise_id TEXT NOT NULL,
                sets TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create logs table: {e}")))?;

        for (name, column) in [
            ("idx_logs_exercise", "exercise_id"),
            ("idx_logs_week", "week"),
            ("idx_logs_date", "date"),
        ] {
            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS {name} ON logs({column})"
            ))
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create index {name}: {e}")))?;
        }

        debug!("SQLite migrations applied");
        Ok(())
    }

    async fn put_settings(&self, settings: &Settings) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO settings (id, program_start_date, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                program_start_date = ?2,
                updated_at = ?3
            ",
        )
        .bind(&settings.id)
        .bind(
            settings
                .program_start_date
                .map(|date| date.format(DATE_FORMAT).to_string()),
        )
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save settings: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl LogStore for SqliteStore {
    async fn init(&self) -> AppResult<()> {
        let existing = sqlx::query("SELECT id FROM settings WHERE id = ?1")
            .bind(SETTINGS_SINGLETON_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read settings: {e}")))?;
        if existing.is_none() {
            self.put_settings(&Settings::default()).await?;
            debug!("Created settings singleton");
        }
        Ok(())
    }

    async fn get_settings(&self) -> AppResult<Settings> {
        let row = sqlx::query("SELECT id, program_start_date FROM settings WHERE id = ?1")
            .bind(SETTINGS_SINGLETON_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get settings: {e}")))?;

        row.map_or_else(
            || Ok(Settings::default()),
            |row| {
                let start: Option<String> = row.try_get("program_start_date")?;
                Ok(Settings {
                    id: row.try_get("id")?,
                    program_start_date: start.as_deref().map(parse_date).transpose()?,
                })
            },
        )
    }

    async fn set_settings(&self, patch: &SettingsPatch) -> AppResult<Settings> {
        let next = self.get_settings().await?.merged(patch);
        self.put_settings(&next).await?;
        Ok(next)
    }

    async fn get_log(&self, date: NaiveDate, exercise_id: &str) -> AppResult<Option<LogEntry>> {
        let key = log_key(date, exercise_id);
        let row = sqlx::query(
            "SELECT date, week, day_id, exercise_id, sets FROM logs WHERE key = ?1",
        )
        .bind(&key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get log {key}: {e}")))?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn save_log(&self, entry: &LogEntry) -> AppResult<LogEntry> {
        let key = entry.key();
        let sets = serde_json::to_string(&entry.sets)?;
        sqlx::query(
            r"
            INSERT INTO logs (key, date, week, day_id, exercise_id, sets, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(key) DO UPDATE SET
                week = ?3,
                day_id = ?4,
                sets = ?6,
                updated_at = ?7
            ",
        )
        .bind(&key)
        .bind(entry.date.format(DATE_FORMAT).to_string())
        .bind(i64::from(entry.week))
        .bind(&entry.day_id)
        .bind(&entry.exercise_id)
        .bind(sets)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save log {key}: {e}")))?;

        debug!(%key, week = entry.week, sets = entry.sets.len(), "Saved log entry");
        Ok(entry.clone())
    }

    async fn list_logs_by_exercise(&self, exercise_id: &str) -> AppResult<Vec<LogEntry>> {
        let rows = sqlx::query(
            "SELECT date, week, day_id, exercise_id, sets FROM logs WHERE exercise_id = ?1",
        )
        .bind(exercise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list logs of {exercise_id}: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }
}

/// Pool settings; the in-memory database lives exactly as long as its one
/// connection, so that connection is never recycled
fn pool_options(is_memory: bool) -> SqlitePoolOptions {
    if is_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(4)
    }
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| AppError::database(format!("Corrupt date '{raw}' in store: {e}")))
}

fn row_to_entry(row: &SqliteRow) -> AppResult<LogEntry> {
    let date: String = row.try_get("date")?;
    let week: i64 = row.try_get("week")?;
    let sets: String = row.try_get("sets")?;
    let sets: Vec<Set> = serde_json::from_str(&sets)?;
    Ok(LogEntry {
        date: parse_date(&date)?,
        // Out-of-range weeks are ignored by the aggregator
        week: u32::try_from(week).unwrap_or(0),
        day_id: row.try_get("day_id")?,
        exercise_id: row.try_get("exercise_id")?,
        sets,
    })
}

async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_never_recycles_its_connection() {
        let memory = pool_options(true);
        assert_eq!(memory.get_max_connections(), 1);
        assert_eq!(memory.get_idle_timeout(), None);
        assert_eq!(memory.get_max_lifetime(), None);

        let file = pool_options(false);
        assert_eq!(file.get_max_connections(), 4);
    }

    #[tokio::test]
    async fn test_memory_database_keeps_data_between_queries() {
        let store = SqliteStore::new("sqlite::memory:").await.unwrap();
        store.init().await.unwrap();
        let entry = LogEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            week: 1,
            day_id: "upper".to_owned(),
            exercise_id: "bench".to_owned(),
            sets: vec![Set::new(1, 60.0, 8, Some(2))],
        };
        store.save_log(&entry).await.unwrap();
        assert_eq!(
            store.list_logs_by_exercise("bench").await.unwrap(),
            vec![entry]
        );
    }
}

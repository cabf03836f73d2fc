// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Typed database URL, content source, and program overrides parsed from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DATABASE_URL` | `sqlite:<path>`, `sqlite::memory:`, `memory:` | `sqlite:./data/gymgo.db` |
//! | `GYMGO_CONTENT_DIR` | directory with `routine.json` / `techniques.json` | `./data` |
//! | `GYMGO_CONTENT_URL` | app scope URL; content is read from `data/*.json` | unset |
//! | `GYMGO_WEEKS_TOTAL` | program length override | routine's `program.weeks` |
//! | `GYMGO_CACHE_MAX_ENTRIES` | offline cache capacity per cache, at least the shell manifest size | 256 |
//! | `ENVIRONMENT` | development / testing / production | development |

use crate::constants::{
    cache::{DEFAULT_CACHE_MAX_ENTRIES, SHELL_ASSETS},
    defaults, env_config,
};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (schema and queries identical to the file backend)
    SqliteMemory,
    /// Plain in-memory store, no SQL involved
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty URL or an unsupported scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "database URL is empty",
            ));
        }
        if s == "memory:" || s == "memory://" {
            return Ok(Self::Memory);
        }
        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            return Ok(if path == ":memory:" || path.is_empty() {
                Self::SqliteMemory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            });
        }
        if s.contains("://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("unsupported database URL '{s}', expected sqlite: or memory:"),
            ));
        }
        // Bare path: treat as a SQLite file
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to a `sqlx` connection string; `None` for the plain memory store
    #[must_use]
    pub fn to_connection_string(&self) -> Option<String> {
        match self {
            Self::SQLite { path } => Some(format!("sqlite:{}", path.display())),
            Self::SqliteMemory => Some("sqlite::memory:".to_owned()),
            Self::Memory => None,
        }
    }

    /// Check if data is lost when the process exits
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::SqliteMemory | Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/gymgo.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_connection_string() {
            Some(url) => f.write_str(&url),
            None => f.write_str("memory:"),
        }
    }
}

/// Where static routine and technique content comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSource {
    /// Local directory holding `routine.json` and `techniques.json`
    Directory(PathBuf),
    /// App scope URL; documents are fetched from `data/` through the offline cache
    Remote(Url),
}

impl ContentSource {
    /// Parse a remote scope URL, normalising it to end with `/`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for malformed or non-http(s) URLs
    pub fn remote(raw: &str) -> AppResult<Self> {
        let mut url = Url::parse(raw.trim()).map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("invalid content URL '{raw}': {e}"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("content URL must be http or https, got '{}'", url.scheme()),
            ));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self::Remote(url))
    }
}

impl Default for ContentSource {
    fn default() -> Self {
        Self::Directory(PathBuf::from(defaults::CONTENT_DIR))
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log store location
    pub database: DatabaseUrl,
    /// Static content location
    pub content: ContentSource,
    /// Program length override; the routine document decides when unset
    pub weeks_total: Option<u32>,
    /// Maximum responses held per offline cache
    pub cache_max_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseUrl::default(),
            content: ContentSource::default(),
            weeks_total: None,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but malformed
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading configuration from environment variables");

        let content = match env_config::optional(env_config::CONTENT_URL) {
            Some(url) => ContentSource::remote(&url)?,
            None => ContentSource::Directory(PathBuf::from(
                env_config::optional(env_config::CONTENT_DIR)
                    .unwrap_or_else(|| defaults::CONTENT_DIR.to_owned()),
            )),
        };

        let config = Self {
            environment: env_config::optional(env_config::ENVIRONMENT)
                .map_or_else(Environment::default, |value| {
                    Environment::from_str_or_default(&value)
                }),
            database: DatabaseUrl::parse_url(&env_config::database_url())?,
            content,
            weeks_total: env_config::optional(env_config::WEEKS_TOTAL)
                .map(|value| parse_weeks_total(&value))
                .transpose()?,
            cache_max_entries: env_config::optional(env_config::CACHE_MAX_ENTRIES)
                .map(|value| parse_cache_max_entries(&value))
                .transpose()?
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
        };

        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} database={} content={} weeks_total={} cache_max_entries={}",
            self.environment,
            self.database,
            self.content,
            self.weeks_total
                .map_or_else(|| "routine".to_owned(), |weeks| weeks.to_string()),
            self.cache_max_entries
        )
    }
}

/// Parse a program length; zero is rejected
///
/// # Errors
///
/// Returns `ConfigInvalid` for non-numeric or zero values
pub fn parse_weeks_total(raw: &str) -> AppResult<u32> {
    let weeks = parse_positive(env_config::WEEKS_TOTAL, raw)?;
    u32::try_from(weeks).map_err(|_| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{} is too large: {raw}", env_config::WEEKS_TOTAL),
        )
    })
}

/// Parse the per-cache capacity; it must fit every shell asset
///
/// # Errors
///
/// Returns `ConfigInvalid` for non-numeric values or values below the
/// shell manifest size
pub fn parse_cache_max_entries(raw: &str) -> AppResult<usize> {
    let entries = parse_positive(env_config::CACHE_MAX_ENTRIES, raw)?;
    if entries < SHELL_ASSETS.len() {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!(
                "{} must be at least {} to hold the app shell, got {entries}",
                env_config::CACHE_MAX_ENTRIES,
                SHELL_ASSETS.len()
            ),
        ));
    }
    Ok(entries)
}

fn parse_positive(key: &str, raw: &str) -> AppResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{key} must be a positive integer, got '{raw}'"),
        )),
    }
}

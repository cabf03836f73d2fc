// ABOUTME: Static routine and technique content loaded once at startup
// ABOUTME: Reads from a local directory or from a remote app scope through the offline cache

//! # Content
//!
//! `routine.json` holds the program, days and weekday schedule;
//! `techniques.json` is an array of technique cards. Both are read-only.

use crate::config::environment::ContentSource;
use crate::constants::cache::DATA_PATH_PREFIX;
use crate::constants::defaults::{HTTP_TIMEOUT_SECS, ROUTINE_FILE, TECHNIQUES_FILE};
use crate::errors::{AppError, AppResult};
use crate::offline::http::HttpFetcher;
use crate::offline::memory::MemoryCacheStore;
use crate::offline::{CacheStore, Fetcher, OfflineCache, Request};
use gymgo_core::models::{Exercise, Routine, Technique};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Version appended to data URLs so a new release bypasses stale HTTP caches
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loaded static content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    /// Training routine
    pub routine: Routine,
    /// Technique library
    pub techniques: Vec<Technique>,
}

impl Content {
    /// Bundle already-parsed documents
    #[must_use]
    pub const fn new(routine: Routine, techniques: Vec<Technique>) -> Self {
        Self {
            routine,
            techniques,
        }
    }

    /// Load from the configured source
    ///
    /// # Errors
    ///
    /// Returns an error if a document is missing, unreachable, or malformed
    pub async fn load(source: &ContentSource, cache_max_entries: usize) -> AppResult<Self> {
        match source {
            ContentSource::Directory(dir) => Self::from_dir(dir).await,
            ContentSource::Remote(scope) => {
                let cache = OfflineCache::new(
                    HttpFetcher::new(HTTP_TIMEOUT_SECS)?,
                    MemoryCacheStore::new(cache_max_entries),
                    scope.clone(),
                );
                Self::from_remote(&cache).await
            }
        }
    }

    /// Read `routine.json` and `techniques.json` from `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or malformed
    pub async fn from_dir(dir: &Path) -> AppResult<Self> {
        let routine_path = dir.join(ROUTINE_FILE);
        let techniques_path = dir.join(TECHNIQUES_FILE);
        let (routine, techniques) = tokio::try_join!(
            read_json::<Routine>(&routine_path),
            read_json::<Vec<Technique>>(&techniques_path),
        )?;
        info!(
            dir = %dir.display(),
            days = routine.days.len(),
            techniques = techniques.len(),
            "Content loaded"
        );
        Ok(Self::new(routine, techniques))
    }

    /// Fetch both documents through the network-first data policy
    ///
    /// # Errors
    ///
    /// Returns an error if a document is unavailable offline or malformed
    pub async fn from_remote<F: Fetcher, C: CacheStore>(
        cache: &OfflineCache<F, C>,
    ) -> AppResult<Self> {
        let (routine, techniques) = tokio::try_join!(
            fetch_json::<Routine, _, _>(cache, ROUTINE_FILE),
            fetch_json::<Vec<Technique>, _, _>(cache, TECHNIQUES_FILE),
        )?;
        info!(
            scope = %cache.scope(),
            days = routine.days.len(),
            techniques = techniques.len(),
            "Content fetched"
        );
        Ok(Self::new(routine, techniques))
    }

    /// Override the routine's program length
    #[must_use]
    pub fn with_weeks_total(mut self, weeks_total: Option<u32>) -> Self {
        if let Some(weeks) = weeks_total {
            self.routine.program.weeks = weeks;
        }
        self
    }

    /// Program length in weeks
    #[must_use]
    pub fn weeks_total(&self) -> u32 {
        self.routine.weeks_total()
    }

    /// Technique card by id
    #[must_use]
    pub fn find_technique(&self, id: &str) -> Option<&Technique> {
        self.techniques.iter().find(|technique| technique.id == id)
    }

    /// Technique referenced by an exercise, if it exists
    #[must_use]
    pub fn technique_for(&self, exercise: &Exercise) -> Option<&Technique> {
        exercise
            .technique_id
            .as_deref()
            .and_then(|id| self.find_technique(id))
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Content file {}", path.display())).with_source(e)
        } else {
            AppError::from(e)
        }
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Read content file");
    serde_json::from_slice(&raw).map_err(|e| {
        AppError::invalid_format(format!("Malformed {}: {e}", path.display())).with_source(e)
    })
}

/// URL of a data document under the app scope, with the version query
///
/// # Errors
///
/// Returns an error if the scope cannot be joined with the file name
pub fn data_url(scope: &Url, file: &str) -> AppResult<Url> {
    let mut url = scope
        .join(&format!("{DATA_PATH_PREFIX}{file}"))
        .map_err(|e| AppError::config(format!("Cannot build data URL for {file}: {e}")))?;
    url.query_pairs_mut().append_pair("v", APP_VERSION);
    Ok(url)
}

async fn fetch_json<T, F, C>(cache: &OfflineCache<F, C>, file: &str) -> AppResult<T>
where
    T: DeserializeOwned,
    F: Fetcher,
    C: CacheStore,
{
    let request = Request::get(data_url(cache.scope(), file)?);
    let served = cache.handle(&request).await?;
    let response = served.response;
    if response.is_offline_marker() {
        return Err(AppError::offline(file));
    }
    if !response.is_success() {
        return Err(AppError::external_service(
            request.url.as_str(),
            format!("returned status {}", response.status),
        ));
    }
    debug!(file, source = ?served.source, "Data document served");
    serde_json::from_slice(&response.body)
        .map_err(|e| AppError::invalid_format(format!("Malformed {file}: {e}")).with_source(e))
}

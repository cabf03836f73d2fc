// ABOUTME: Cache command installing the offline shell and resolving paths through it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::Context;
use gymgo::config::environment::ContentSource;
use gymgo::constants::defaults::HTTP_TIMEOUT_SECS;
use gymgo::errors::{AppError, AppResult};
use gymgo::offline::http::HttpFetcher;
use gymgo::offline::memory::MemoryCacheStore;
use gymgo::offline::{OfflineCache, Request};
use tracing::warn;

/// Install, activate, then serve each path and report where it came from
pub async fn warm(ctx: &Context, scope: &str, paths: &[String]) -> AppResult<()> {
    let ContentSource::Remote(scope) = ContentSource::remote(scope)? else {
        return Err(AppError::invalid_input("Cache scope must be an http(s) URL"));
    };
    let cache = OfflineCache::new(
        HttpFetcher::new(HTTP_TIMEOUT_SECS)?,
        MemoryCacheStore::new(ctx.config.cache_max_entries),
        scope,
    );

    match cache.install().await {
        Ok(count) => println!("Installed {count} shell assets into {}", cache.cache_name()),
        Err(e) => warn!("Shell install failed, continuing without it: {e}"),
    }
    let deleted = cache.activate().await?;
    if !deleted.is_empty() {
        println!("Deleted stale caches: {}", deleted.join(", "));
    }

    for path in paths {
        let url = cache
            .scope()
            .join(path)
            .map_err(|e| AppError::invalid_input(format!("Bad path {path}: {e}")))?;
        let request = if path.ends_with(".html") || path.is_empty() {
            Request::navigate(url)
        } else {
            Request::get(url)
        };
        let policy = cache
            .classify(&request)
            .map_or_else(|| "pass-through".to_owned(), |policy| policy.to_string());
        let served = cache.handle(&request).await?;
        println!(
            "{path}: {policy} -> {} from {:?} ({} bytes)",
            served.response.status,
            served.source,
            served.response.body.len()
        );
    }
    Ok(())
}

// ABOUTME: In-memory named cache store with LRU eviction
// ABOUTME: Each named cache is its own bounded LruCache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheStore, CachedResponse};
use crate::errors::AppResult;
use async_trait::async_trait;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory cache store
///
/// Clones share the same caches. Every named cache holds at most
/// `capacity` responses.
#[derive(Clone)]
pub struct MemoryCacheStore {
    caches: Arc<RwLock<HashMap<String, LruCache<String, CachedResponse>>>>,
    capacity: NonZeroUsize,
}

impl MemoryCacheStore {
    /// Capacity used when zero entries are requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store holding at most `max_entries` responses per cache
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            caches: Arc::new(RwLock::new(HashMap::new())),
            capacity: NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY),
        }
    }

    /// Number of stored responses across all caches
    pub async fn len(&self) -> usize {
        self.caches.read().await.values().map(LruCache::len).sum()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY.get())
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn put(&self, cache: &str, key: &str, response: CachedResponse) -> AppResult<()> {
        let mut caches = self.caches.write().await;
        // LruCache evicts the least recently used entry on push
        caches
            .entry(cache.to_owned())
            .or_insert_with(|| LruCache::new(self.capacity))
            .push(key.to_owned(), response);
        drop(caches);
        Ok(())
    }

    async fn get(&self, cache: &str, key: &str) -> AppResult<Option<CachedResponse>> {
        // LruCache::get updates access order, so it needs the write lock
        let mut caches = self.caches.write().await;
        let found = caches
            .get_mut(cache)
            .and_then(|entries| entries.get(key).cloned());
        drop(caches);
        Ok(found)
    }

    async fn cache_names(&self) -> AppResult<Vec<String>> {
        let caches = self.caches.read().await;
        let mut names: Vec<String> = caches
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        drop(caches);
        names.sort();
        Ok(names)
    }

    async fn delete_cache(&self, cache: &str) -> AppResult<bool> {
        let removed = self.caches.write().await.remove(cache);
        let count = removed.as_ref().map_or(0, LruCache::len);
        if count > 0 {
            debug!(cache, removed = count, "Deleted cache");
        }
        Ok(count > 0)
    }
}
